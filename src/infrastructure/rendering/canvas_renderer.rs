use std::rc::Rc;

use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::line_geometry::{PlotArea, Point, ValueRange, control_points, fit_size, label_stride, project, tick_precision};
use crate::domain::{
    chart::{ChartConfiguration, ChartEngine, ChartHandle, Dataset},
    errors::{ChartError, ChartResult},
    logging::LogComponent,
};
use crate::event_utils::{WindowListener, on_window_resize};
use crate::{log_debug, log_warn};

const FONT: &str = "12px -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
const TEXT_COLOR: &str = "#666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const MAX_Y_TICKS: usize = 6;
const X_LABEL_WIDTH: f64 = 84.0;
const POINT_RADIUS: f64 = 3.0;
const MAX_POINTS_WITH_MARKERS: usize = 60;

/// Canvas 2D line-chart engine bound to one `<canvas>` element id
#[derive(Debug, Clone)]
pub struct CanvasChartEngine {
    canvas_id: String,
}

impl CanvasChartEngine {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    fn find_canvas(&self) -> ChartResult<HtmlCanvasElement> {
        document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| ChartError::RenderFailed(format!("canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::RenderFailed(format!("#{} is not a canvas", self.canvas_id)))
    }
}

impl ChartEngine for CanvasChartEngine {
    type Handle = CanvasChartHandle;

    fn create(&self, config: &ChartConfiguration) -> ChartResult<CanvasChartHandle> {
        let canvas = self.find_canvas()?;
        let surface = Rc::new(ChartSurface::new(canvas, config.clone())?);
        surface.fit_to_container();
        surface.draw()?;

        let resize_listener = if config.options.responsive {
            let weak = Rc::downgrade(&surface);
            on_window_resize(move |_| {
                if let Some(surface) = weak.upgrade() {
                    surface.fit_to_container();
                    if let Err(e) = surface.draw() {
                        log_warn!(LogComponent::Infrastructure("CanvasChart"), "{e}");
                    }
                }
            })
        } else {
            None
        };

        log_debug!(LogComponent::Infrastructure("CanvasChart"), "🎨 Chart created on #{}", self.canvas_id);

        Ok(CanvasChartHandle { surface, resize_listener })
    }
}

/// Live chart drawn on a canvas. Destroying it detaches the resize listener
/// and wipes the canvas.
pub struct CanvasChartHandle {
    surface: Rc<ChartSurface>,
    resize_listener: Option<WindowListener>,
}

impl ChartHandle for CanvasChartHandle {
    fn destroy(self) {
        if let Some(listener) = self.resize_listener {
            listener.detach();
        }
        self.surface.clear();
        log_debug!(LogComponent::Infrastructure("CanvasChart"), "🗑️ Chart destroyed");
    }
}

struct ChartSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    config: ChartConfiguration,
}

impl ChartSurface {
    fn new(canvas: HtmlCanvasElement, config: ChartConfiguration) -> ChartResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| ChartError::RenderFailed(format!("failed to get 2D context: {e:?}")))?
            .ok_or_else(|| ChartError::RenderFailed("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::RenderFailed("failed to cast to 2D context".to_string()))?;

        Ok(Self { canvas, context, config })
    }

    /// Size the backing store to the parent's width when responsive
    fn fit_to_container(&self) {
        if !self.config.options.responsive {
            return;
        }
        let Some(parent) = self.canvas.parent_element() else {
            return;
        };
        let container_width = parent.client_width() as f64;
        if container_width <= 0.0 {
            return;
        }
        let (width, height) = fit_size(container_width, self.config.options.aspect_ratio);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&self) {
        let (w, h) = self.size();
        self.context.clear_rect(0.0, 0.0, w, h);
    }

    fn draw(&self) -> ChartResult<()> {
        self.draw_inner()
            .map_err(|e| ChartError::RenderFailed(format!("canvas drawing failed: {e:?}")))
    }

    fn draw_inner(&self) -> Result<(), JsValue> {
        let (width, height) = self.size();
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_font(FONT);

        let area = PlotArea::for_canvas(width, height);
        let begin_at_zero = self.config.options.scales.y.begin_at_zero;
        let all_values: Vec<f64> = self.config.data.datasets.iter().flat_map(|d| d.data.iter().copied()).collect();

        for dataset in &self.config.data.datasets {
            self.draw_legend(dataset, width)?;
        }

        let Some(range) = ValueRange::from_values(&all_values, begin_at_zero) else {
            ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            return ctx.fill_text("No data", width / 2.0, height / 2.0);
        };

        self.draw_y_axis(&area, &range)?;
        self.draw_x_labels(&area)?;
        for dataset in &self.config.data.datasets {
            self.draw_series(dataset, &area, &range)?;
        }
        Ok(())
    }

    fn draw_legend(&self, dataset: &Dataset, width: f64) -> Result<(), JsValue> {
        let ctx = &self.context;
        let box_w = 40.0;
        let box_h = 12.0;
        let text_w = ctx.measure_text(&dataset.label)?.width();
        let x = (width - box_w - 8.0 - text_w) / 2.0;
        let y = 12.0;

        ctx.set_stroke_style(&JsValue::from(&dataset.border_color));
        ctx.set_line_width(3.0);
        ctx.stroke_rect(x, y, box_w, box_h);

        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&dataset.label, x + box_w + 8.0, y + box_h / 2.0)
    }

    fn draw_y_axis(&self, area: &PlotArea, range: &ValueRange) -> Result<(), JsValue> {
        let ctx = &self.context;
        let ticks = range.ticks(MAX_Y_TICKS);
        let precision = tick_precision(&ticks);

        ctx.set_line_width(1.0);
        ctx.set_stroke_style(&JsValue::from(GRID_COLOR));
        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        for tick in ticks {
            let y = area.bottom() - (tick - range.min) / range.span() * area.height;
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            ctx.fill_text(&format!("{:.*}", precision, tick), area.left - 8.0, y)?;
        }
        Ok(())
    }

    fn draw_x_labels(&self, area: &PlotArea) -> Result<(), JsValue> {
        let ctx = &self.context;
        let labels = &self.config.data.labels;
        let n = labels.len();
        if n == 0 {
            return Ok(());
        }
        let stride = label_stride(n, area.width, X_LABEL_WIDTH);

        ctx.set_fill_style(&JsValue::from(TEXT_COLOR));
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");

        for (i, label) in labels.iter().enumerate().step_by(stride) {
            let x = if n > 1 {
                area.left + area.width * i as f64 / (n - 1) as f64
            } else {
                area.left + area.width / 2.0
            };
            ctx.fill_text(label, x, area.bottom() + 8.0)?;
        }
        Ok(())
    }

    fn draw_series(&self, dataset: &Dataset, area: &PlotArea, range: &ValueRange) -> Result<(), JsValue> {
        let ctx = &self.context;
        let points = project(&dataset.data, area, range);
        let Some(first) = points.first().copied() else {
            return Ok(());
        };

        ctx.begin_path();
        trace_path(ctx, &points, dataset.tension);

        if dataset.fill {
            if let Some(last) = points.last() {
                ctx.line_to(last.x, area.bottom());
                ctx.line_to(first.x, area.bottom());
                ctx.close_path();
            }
            ctx.set_global_alpha(0.2);
            ctx.set_fill_style(&JsValue::from(&dataset.border_color));
            ctx.fill();
            ctx.set_global_alpha(1.0);
            ctx.begin_path();
            trace_path(ctx, &points, dataset.tension);
        }

        ctx.set_stroke_style(&JsValue::from(&dataset.border_color));
        ctx.set_line_width(3.0);
        ctx.stroke();

        if points.len() <= MAX_POINTS_WITH_MARKERS {
            ctx.set_fill_style(&JsValue::from(&dataset.border_color));
            for p in &points {
                ctx.begin_path();
                ctx.arc(p.x, p.y, POINT_RADIUS, 0.0, std::f64::consts::TAU)?;
                ctx.fill();
            }
        }
        Ok(())
    }
}

fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point], tension: f64) {
    let Some(first) = points.first() else {
        return;
    };
    ctx.move_to(first.x, first.y);

    if tension <= 0.0 {
        for p in &points[1..] {
            ctx.line_to(p.x, p.y);
        }
        return;
    }

    let cps = control_points(points, tension);
    for i in 1..points.len() {
        let (_, out_cp) = cps[i - 1];
        let (in_cp, _) = cps[i];
        let p = points[i];
        ctx.bezier_curve_to(out_cp.x, out_cp.y, in_cp.x, in_cp.y, p.x, p.y);
    }
}
