use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{Dashboard, DashboardConfig, FetchSeriesUseCase},
    domain::{
        chart::{BarChartModel, DashboardView, LineChartModel},
        dashboard::FetchRequest,
        logging::LogComponent,
        market_data::Metric,
    },
    infrastructure::{DebounceTimer, StockApiClient, rendering::CanvasChartRenderer},
    log_error, log_warn,
};

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 300;

const STYLES: &str = r#"
.stock-dashboard-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    padding: 20px;
}

.ticker-input {
    font-size: 16px;
    padding: 6px 10px;
    width: 320px;
}

.dashboard-container {
    margin-top: 20px;
}

.status {
    color: #777;
    font-size: 13px;
    margin-bottom: 10px;
}

.checkbox-container {
    display: flex;
    gap: 16px;
    margin-bottom: 16px;
}

.checkbox-label {
    cursor: pointer;
}

.error {
    color: red;
    font-weight: 600;
}

.chart-canvas {
    display: block;
    max-width: 90%;
}

.legend {
    display: flex;
    gap: 12px;
    justify-content: center;
    width: 90%;
    font-size: 13px;
}
"#;

/// 🦀 Root component: owns the dashboard controller, the settle timer and the API client
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_window().unwrap_or_else(|e| {
        log_warn!(LogComponent::Presentation("App"), "⚠️ Ignoring page config: {}", e);
        DashboardConfig::default()
    });

    let dashboard = create_rw_signal(Dashboard::new(&config));
    let fetcher = Rc::new(FetchSeriesUseCase::new(StockApiClient::new(config.api_base_url.clone())));
    let timer = Rc::new(RefCell::new(DebounceTimer::new()));

    // Requests are not cancelled; the controller reconciles late responses.
    let start_fetch = move |request: FetchRequest| {
        let fetcher = fetcher.clone();
        spawn_local(async move {
            let result = fetcher.execute(&request).await;
            dashboard.update(|d| {
                d.receive(request.seq, result);
            });
        });
    };

    if let Some(request) = dashboard.try_update(|d| d.mount()).flatten() {
        start_fetch(request);
    }

    let on_input = {
        let start_fetch = start_fetch.clone();
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            let Some((ticket, delay_ms)) =
                dashboard.try_update(|d| (d.input(&value), d.settle_delay_ms()))
            else {
                return;
            };

            let start_fetch = start_fetch.clone();
            timer.borrow_mut().schedule(delay_ms, move || {
                if let Some(request) = dashboard.try_update(|d| d.settle(ticket)).flatten() {
                    start_fetch(request);
                }
            });
        }
    };

    let charts = create_memo(move |_| dashboard.with(|d| d.view()));

    view! {
        <style>{STYLES}</style>
        <div class="stock-dashboard-app">
            <h1>"Stock Data Dashboard"</h1>
            <input
                type="text"
                class="ticker-input"
                placeholder="Enter stock ticker (e.g., TSLA, GOOG)"
                prop:value=move || dashboard.with(|d| d.raw_input().to_string())
                on:input=on_input
            />
            <StockDashboard dashboard=dashboard charts=charts />
        </div>
    }
}

/// 📊 Heading, metric toggles and either the error text or both charts
#[component]
fn StockDashboard(dashboard: RwSignal<Dashboard>, charts: Memo<DashboardView>) -> impl IntoView {
    view! {
        <div class="dashboard-container">
            <h1>{move || format!("{} Stock Data", dashboard.with(|d| d.committed().to_string()))}</h1>
            <div class="status">{move || dashboard.with(|d| d.status())}</div>
            <MetricSelector dashboard=dashboard />
            {move || match charts.get() {
                DashboardView::Error(message) => view! { <p class="error">{message}</p> }.into_view(),
                DashboardView::Charts { prices, volume } => view! {
                    <h2>"Stock Prices Over Time"</h2>
                    <PriceChart model=prices />
                    <h2>"Volume Over Time"</h2>
                    <VolumeChart model=volume />
                }
                .into_view(),
            }}
        </div>
    }
}

/// ☑️ One checkbox per metric. A rejected uncheck re-renders as checked.
#[component]
fn MetricSelector(dashboard: RwSignal<Dashboard>) -> impl IntoView {
    view! {
        <div class="checkbox-container">
            {Metric::all()
                .into_iter()
                .map(|metric| {
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                value=metric.to_string()
                                prop:checked=move || dashboard.with(|d| d.is_selected(metric))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    dashboard.update(|d| {
                                        d.toggle_metric(metric, checked);
                                    });
                                }
                            />
                            {metric.to_string()}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PriceChart(model: LineChartModel) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let legend: Vec<(Metric, &'static str)> = model.lines.iter().map(|l| (l.metric, l.stroke)).collect();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            let renderer = CanvasChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
            if let Err(e) = renderer.draw_line_chart(&canvas, &model) {
                log_error!(LogComponent::Presentation("PriceChart"), "❌ Render error: {:?}", e);
            }
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="chart-canvas" width=CHART_WIDTH height=CHART_HEIGHT />
        <div class="legend">
            {legend
                .into_iter()
                .map(|(metric, stroke)| {
                    view! { <span style=format!("color: {}", stroke)>{format!("■ {}", metric)}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn VolumeChart(model: BarChartModel) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            let renderer = CanvasChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
            if let Err(e) = renderer.draw_bar_chart(&canvas, &model) {
                log_error!(LogComponent::Presentation("VolumeChart"), "❌ Render error: {:?}", e);
            }
        }
    });

    view! { <canvas node_ref=canvas_ref class="chart-canvas" width=CHART_WIDTH height=CHART_HEIGHT /> }
}
