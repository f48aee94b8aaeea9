use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::{ChartViewOptions, FormField, OptionsFormModel, PriceChartView, browser_spawner},
    config::AppConfig,
    domain::{logging::LogComponent, state::SelectionStore},
    infrastructure::{http::CoinGeckoHttpClient, rendering::CanvasChartEngine},
    log_info,
    view_state::ChartStatus,
};

type BrowserChartView = PriceChartView<CoinGeckoHttpClient, CanvasChartEngine>;

const STYLES: &str = r#"
.crypto-chart-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    max-width: 960px;
    margin: 0 auto;
    padding: 20px;
    color: #333;
}

.options-form {
    display: flex;
    flex-wrap: wrap;
    align-items: flex-end;
    gap: 16px;
    margin-bottom: 20px;
}

.choice {
    display: flex;
    flex-direction: column;
    font-size: 12px;
    color: #666;
}

.choice select {
    margin-top: 4px;
    padding: 6px 8px;
    font-size: 14px;
}

.submit-btn {
    padding: 7px 16px;
    border: none;
    border-radius: 4px;
    background: rgb(75, 192, 192);
    color: white;
    cursor: pointer;
}

.chart-container {
    position: relative;
    width: 100%;
}

.status {
    margin-top: 8px;
    font-size: 13px;
    color: #666;
}

.status.error {
    color: #c0392b;
}
"#;

/// Root component: owns the selection store and hands it down through context
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = SelectionStore::new(config.default_selection.clone());
    provide_context(store);
    provide_context(config);

    log_info!(LogComponent::Presentation("App"), "🚀 Crypto price chart mounted");

    view! {
        <style>{STYLES}</style>
        <div class="crypto-chart-app">
            <h1>"Crypto Price Chart"</h1>
            <OptionsForm />
            <PriceChart />
        </div>
    }
}

/// Coin / currency / days pickers. Submitting pushes the tuple into the store.
#[component]
pub fn OptionsForm() -> impl IntoView {
    let store = expect_context::<Rc<SelectionStore>>();
    let form = create_rw_signal(OptionsFormModel::from_store(&store));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|f| f.submit(&store));
    };

    view! {
        <form class="options-form" on:submit=on_submit>
            <ChoiceField label="Coin" field=FormField::Coin form=form />
            <ChoiceField label="Currency" field=FormField::Currency form=form />
            <ChoiceField label="Days" field=FormField::Days form=form />
            <button type="submit" class="submit-btn">"Update chart"</button>
        </form>
    }
}

#[component]
fn ChoiceField(label: &'static str, field: FormField, form: RwSignal<OptionsFormModel>) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
    };

    view! {
        <label class="choice">
            <span>{label}</span>
            <select on:change=on_change>
                {field
                    .options()
                    .into_iter()
                    .map(|opt| {
                        view! {
                            <option value=opt selected=move || form.with(|f| f.value(field) == opt)>
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Canvas plus inline status line. The chart view is created once the
/// canvas exists and torn down with the component.
#[component]
pub fn PriceChart() -> impl IntoView {
    let store = expect_context::<Rc<SelectionStore>>();
    let config = expect_context::<AppConfig>();

    let status = create_rw_signal(ChartStatus::Loading(store.current_selection().to_string()));
    let canvas_ref = create_node_ref::<Canvas>();
    let canvas_id = config.canvas_id.clone();
    let chart_view: Rc<RefCell<Option<BrowserChartView>>> = Rc::new(RefCell::new(None));

    {
        let chart_view = Rc::clone(&chart_view);
        canvas_ref.on_load(move |_| {
            let options = ChartViewOptions {
                style: config.chart_style.clone(),
                on_status: Some(Rc::new(move |s: ChartStatus| status.set(s))),
                ..ChartViewOptions::default()
            };
            let view = PriceChartView::new(
                store,
                CoinGeckoHttpClient::new(config.api_base_url.clone()),
                CanvasChartEngine::new(config.canvas_id.clone()),
                browser_spawner(),
                options,
            );
            view.init();
            *chart_view.borrow_mut() = Some(view);
        });
    }

    on_cleanup(move || {
        if let Some(view) = chart_view.borrow_mut().take() {
            view.teardown();
        }
    });

    view! {
        <div class="chart-container">
            <canvas id=canvas_id node_ref=canvas_ref width="800" height="400"></canvas>
            <div class="status" class:error=move || matches!(status.get(), ChartStatus::Failed(_))>
                {move || status.get().to_string()}
            </div>
        </div>
    }
}
