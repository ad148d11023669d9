#![cfg(target_arch = "wasm32")]

use stock_dashboard_wasm::domain::chart::{BarChartModel, LineChartModel};
use stock_dashboard_wasm::domain::dashboard::SelectedMetrics;
use stock_dashboard_wasm::domain::logging::TimeProvider;
use stock_dashboard_wasm::domain::market_data::{PriceRecord, PriceSeries};
use stock_dashboard_wasm::infrastructure::rendering::CanvasChartRenderer;
use stock_dashboard_wasm::infrastructure::services::BrowserTimeProvider;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn series() -> PriceSeries {
    PriceSeries::new(vec![
        PriceRecord::new("2024-01-01 09:30:00", 100.0, 101.0, 99.0, 100.5, 1000.0),
        PriceRecord::new("2024-01-01 09:31:00", 100.5, 102.0, 100.0, 101.5, 1500.0),
    ])
}

#[wasm_bindgen_test]
fn draws_both_charts() {
    let renderer = CanvasChartRenderer::new(400, 200);
    let line = LineChartModel::build(&series(), &SelectedMetrics::default());
    let bars = BarChartModel::build(&series());

    let target = canvas();
    assert!(renderer.draw_line_chart(&target, &line).is_ok());
    assert_eq!(target.width(), 400);
    assert!(renderer.draw_bar_chart(&canvas(), &bars).is_ok());
}

#[wasm_bindgen_test]
fn empty_models_draw_placeholder() {
    let renderer = CanvasChartRenderer::new(400, 200);
    assert!(renderer.draw_line_chart(&canvas(), &LineChartModel::default()).is_ok());
    assert!(renderer.draw_bar_chart(&canvas(), &BarChartModel::default()).is_ok());
}

#[wasm_bindgen_test]
fn browser_clock_formats_time_of_day() {
    let clock = BrowserTimeProvider::new();
    let formatted = clock.format_timestamp(clock.current_timestamp());
    assert_eq!(formatted.len(), "00:00:00.000".len());
    assert_eq!(formatted.matches(':').count(), 2);
}
