#![cfg(target_arch = "wasm32")]
use crypto_price_chart::domain::chart::{ChartConfigService, ChartEngine, ChartHandle, ChartStyle};
use crypto_price_chart::domain::errors::ChartError;
use crypto_price_chart::domain::market_data::{PricePoint, PriceSeries, Selection};
use crypto_price_chart::infrastructure::rendering::CanvasChartEngine;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(400);
    canvas.set_height(200);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn sample_config() -> crypto_price_chart::domain::chart::ChartConfiguration {
    let series: PriceSeries = vec![
        PricePoint::new(1_700_000_000_000, 42000.0),
        PricePoint::new(1_700_086_400_000, 43000.0),
    ]
    .into_iter()
    .collect();
    ChartConfigService::line_chart(&Selection::default(), &series, &ChartStyle::default(), |ts| ts.to_string())
}

#[wasm_bindgen_test]
fn draws_and_clears_canvas() {
    let canvas = mount_canvas("engine-draw");
    let blank = canvas.to_data_url().unwrap();

    let engine = CanvasChartEngine::new("engine-draw");
    let handle = engine.create(&sample_config()).unwrap();
    assert_ne!(canvas.to_data_url().unwrap(), blank);

    handle.destroy();
    let (w, h) = (canvas.width(), canvas.height());
    let cleared = mount_canvas("engine-draw-reference");
    cleared.set_width(w);
    cleared.set_height(h);
    assert_eq!(canvas.to_data_url().unwrap(), cleared.to_data_url().unwrap());
}

#[wasm_bindgen_test]
fn missing_canvas_is_render_error() {
    let engine = CanvasChartEngine::new("no-such-canvas");
    let err = engine.create(&sample_config()).err().unwrap();
    assert!(matches!(err, ChartError::RenderFailed(_)));
}
