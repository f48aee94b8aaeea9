use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use crate::domain::{
    chart::{ChartConfigService, ChartEngine, ChartHandle, ChartStyle},
    errors::{ChartError, ChartResult},
    logging::LogComponent,
    market_data::{PriceDataProvider, PriceSeries, Selection},
    state::{SelectionStore, Subscription},
};
use crate::time_utils::format_date_label;
use crate::view_state::{ChartStatus, ChartViewState};
use crate::{log_debug, log_error, log_info};

/// Runs a render pass's fetch to completion on the local executor
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Receives status changes for the inline status line
pub type StatusSink = Rc<dyn Fn(ChartStatus)>;

/// Spawner backed by the browser microtask queue
pub fn browser_spawner() -> Spawner {
    Rc::new(|fut: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(fut))
}

/// Optional knobs of [`PriceChartView`]
#[derive(Clone)]
pub struct ChartViewOptions {
    pub style: ChartStyle,
    pub labeler: fn(u64) -> String,
    pub on_status: Option<StatusSink>,
}

impl Default for ChartViewOptions {
    fn default() -> Self {
        Self { style: ChartStyle::default(), labeler: format_date_label, on_status: None }
    }
}

/// Keeps one chart in sync with the [`SelectionStore`].
///
/// Every change notification starts a render pass: fetch for the current
/// selection, release the previous chart, create the next one. Passes are
/// numbered; a completion is applied only when it belongs to the newest pass,
/// its selection is still current and the view has not been torn down.
pub struct PriceChartView<P, E>
where
    P: PriceDataProvider + 'static,
    E: ChartEngine + 'static,
{
    inner: Rc<ViewInner<P, E>>,
}

struct ViewInner<P, E: ChartEngine> {
    store: Rc<SelectionStore>,
    provider: P,
    engine: E,
    spawner: Spawner,
    options: ChartViewOptions,
    state: Cell<ChartViewState>,
    generation: Cell<u64>,
    handle: RefCell<Option<E::Handle>>,
    subscription: RefCell<Option<Subscription>>,
}

impl<P, E> PriceChartView<P, E>
where
    P: PriceDataProvider + 'static,
    E: ChartEngine + 'static,
{
    pub fn new(store: Rc<SelectionStore>, provider: P, engine: E, spawner: Spawner, options: ChartViewOptions) -> Self {
        Self {
            inner: Rc::new(ViewInner {
                store,
                provider,
                engine,
                spawner,
                options,
                state: Cell::new(ChartViewState::Uninitialized),
                generation: Cell::new(0),
                handle: RefCell::new(None),
                subscription: RefCell::new(None),
            }),
        }
    }

    /// Subscribe to the store. The store replays one notification on
    /// subscribe and that notification drives the initial render pass, so
    /// initialisation fetches exactly once.
    pub fn init(&self) {
        if self.inner.state.get() != ChartViewState::Uninitialized {
            log_debug!(
                LogComponent::Application("PriceChartView"),
                "init ignored in state {}",
                self.inner.state.get()
            );
            return;
        }

        log_info!(LogComponent::Application("PriceChartView"), "📊 Initializing price chart view");

        let weak: Weak<ViewInner<P, E>> = Rc::downgrade(&self.inner);
        let subscription = self.inner.store.subscribe_to_changes(move || {
            if let Some(inner) = weak.upgrade() {
                ViewInner::render(&inner);
            }
        });
        *self.inner.subscription.borrow_mut() = Some(subscription);
    }

    /// Start a render pass for the store's current selection
    pub fn render(&self) {
        ViewInner::render(&self.inner);
    }

    /// Unsubscribe, then release the chart. Completions still in flight are
    /// dropped when they arrive.
    pub fn teardown(&self) {
        let inner = &self.inner;
        if inner.state.get().is_destroyed() {
            return;
        }
        inner.state.set(ChartViewState::Destroyed);

        if let Some(subscription) = inner.subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
        if let Some(handle) = inner.handle.borrow_mut().take() {
            handle.destroy();
        }

        log_info!(LogComponent::Application("PriceChartView"), "🧹 Price chart view torn down");
    }

    pub fn state(&self) -> ChartViewState {
        self.inner.state.get()
    }

    /// Number of render passes started so far
    pub fn render_passes(&self) -> u64 {
        self.inner.generation.get()
    }

    pub fn has_chart(&self) -> bool {
        self.inner.handle.borrow().is_some()
    }
}

impl<P, E> ViewInner<P, E>
where
    P: PriceDataProvider + 'static,
    E: ChartEngine + 'static,
{
    fn render(this: &Rc<Self>) {
        if this.state.get().is_destroyed() {
            return;
        }

        let selection = this.store.current_selection();
        let generation = this.generation.get() + 1;
        this.generation.set(generation);
        this.state.set(this.state.get().on_render_started());

        log_debug!(
            LogComponent::Application("PriceChartView"),
            "📡 Render pass #{} for {}",
            generation,
            this.provider.describe(&selection)
        );
        this.report(ChartStatus::Loading(selection.to_string()));

        let fetch = this.provider.fetch_market_chart(&selection);
        let weak = Rc::downgrade(this);
        (this.spawner)(Box::pin(async move {
            let result = fetch.await;
            if let Some(inner) = weak.upgrade() {
                inner.complete(generation, &selection, result);
            }
        }));
    }

    fn complete(&self, generation: u64, selection: &Selection, result: ChartResult<PriceSeries>) {
        if self.state.get().is_destroyed() {
            log_debug!(
                LogComponent::Application("PriceChartView"),
                "Dropping pass #{} completion after teardown",
                generation
            );
            return;
        }
        if generation != self.generation.get() || *selection != self.store.current_selection() {
            log_debug!(
                LogComponent::Application("PriceChartView"),
                "Dropping stale pass #{} for {} (latest #{})",
                generation,
                selection,
                self.generation.get()
            );
            return;
        }

        let outcome = result.and_then(|series| self.redraw(selection, &series).map(|_| series.len()));
        match outcome {
            Ok(points) => {
                log_info!(
                    LogComponent::Application("PriceChartView"),
                    "✅ Rendered {} points for {}",
                    points,
                    selection
                );
                self.report(ChartStatus::Ready { points });
            }
            Err(e) => {
                log_error!(LogComponent::Application("PriceChartView"), "❌ {} [{}]", e, e.kind());
                self.report(ChartStatus::Failed(e.to_string()));
            }
        }

        self.state.set(self.state.get().on_render_settled());
    }

    /// Release the current chart, then build the next one
    fn redraw(&self, selection: &Selection, series: &PriceSeries) -> Result<(), ChartError> {
        let config = ChartConfigService::line_chart(selection, series, &self.options.style, self.options.labeler);

        if let Some(previous) = self.handle.borrow_mut().take() {
            previous.destroy();
        }
        let handle = self.engine.create(&config)?;
        *self.handle.borrow_mut() = Some(handle);
        Ok(())
    }

    fn report(&self, status: ChartStatus) {
        if let Some(sink) = &self.options.on_status {
            sink(status);
        }
    }
}
