use futures::executor::block_on;
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use stock_dashboard_wasm::application::{Dashboard, DashboardConfig, FetchSeriesUseCase};
use stock_dashboard_wasm::domain::dashboard::{FetchRequest, ResponseOutcome, ResponsePolicy, ViewPhase};
use stock_dashboard_wasm::domain::errors::FetchError;
use stock_dashboard_wasm::domain::logging::{MemoryLogger, init_logger};
use stock_dashboard_wasm::domain::market_data::{PriceRecord, PriceSeriesSource, Ticker};

static LOGS: Lazy<Arc<MemoryLogger>> = Lazy::new(|| {
    let logger = Arc::new(MemoryLogger::new(1000));
    init_logger(Box::new(logger.clone()));
    logger
});

/// In-memory stand-in for the stock API; unknown tickers answer 404
#[derive(Default)]
struct FakeStockApi {
    responses: HashMap<String, Result<Vec<PriceRecord>, FetchError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeStockApi {
    fn with(mut self, ticker: &str, response: Result<Vec<PriceRecord>, FetchError>) -> Self {
        self.responses.insert(ticker.to_string(), response);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PriceSeriesSource for FakeStockApi {
    async fn fetch_series(&self, ticker: &Ticker) -> Result<Vec<PriceRecord>, FetchError> {
        self.calls.borrow_mut().push(ticker.value().to_string());
        self.responses
            .get(ticker.value())
            .cloned()
            .unwrap_or(Err(FetchError::NotFound { status: 404 }))
    }
}

fn aapl_records() -> Vec<PriceRecord> {
    vec![PriceRecord::new("2024-01-01 09:30", 100.0, 101.0, 99.0, 100.5, 1000.0)]
}

fn commit(dashboard: &mut Dashboard, text: &str) -> Option<FetchRequest> {
    let ticket = dashboard.input(text);
    dashboard.settle(ticket)
}

fn run(use_case: &FetchSeriesUseCase<FakeStockApi>, dashboard: &mut Dashboard, request: FetchRequest) -> ResponseOutcome {
    let result = block_on(use_case.execute(&request));
    dashboard.receive(request.seq, result)
}

fn loaded_dashboard(api: FakeStockApi) -> (Dashboard, FetchSeriesUseCase<FakeStockApi>) {
    let use_case = FetchSeriesUseCase::new(api.with("AAPL", Ok(aapl_records())));
    let mut dashboard = Dashboard::default();
    let request = dashboard.mount().unwrap();
    run(&use_case, &mut dashboard, request);
    (dashboard, use_case)
}

#[test]
fn success_replaces_series_and_clears_error() {
    Lazy::force(&LOGS);
    let use_case = FetchSeriesUseCase::new(
        FakeStockApi::default().with("AAPL", Ok(aapl_records())),
    );
    let mut dashboard = Dashboard::default();

    let request = commit(&mut dashboard, "nope").unwrap();
    run(&use_case, &mut dashboard, request);
    assert_eq!(dashboard.error(), Some("Stock not found"));

    let request = commit(&mut dashboard, "aapl").unwrap();
    assert_eq!(run(&use_case, &mut dashboard, request), ResponseOutcome::Applied);
    assert_eq!(dashboard.series().records(), aapl_records().as_slice());
    assert_eq!(dashboard.error(), None);
    assert_eq!(dashboard.phase(), &ViewPhase::Displaying);
    assert!(LOGS.contains("AAPL returned 1 records"));
}

#[test]
fn not_found_keeps_prior_series() {
    let (mut dashboard, use_case) = loaded_dashboard(FakeStockApi::default());

    let request = commit(&mut dashboard, "zzzz").unwrap();
    run(&use_case, &mut dashboard, request);

    assert_eq!(dashboard.error(), Some("Stock not found"));
    assert_eq!(dashboard.series().records(), aapl_records().as_slice());
    assert_eq!(dashboard.phase(), &ViewPhase::Error);
}

#[test]
fn transport_fault_surfaces_its_message() {
    let api = FakeStockApi::default().with("MSFT", Err(FetchError::Transport("Failed to fetch".into())));
    let (mut dashboard, use_case) = loaded_dashboard(api);

    let request = commit(&mut dashboard, "msft").unwrap();
    run(&use_case, &mut dashboard, request);
    assert_eq!(dashboard.error(), Some("Failed to fetch"));
    assert_eq!(dashboard.series().len(), 1);
}

#[test]
fn clearing_the_ticker_issues_no_fetch() {
    let (mut dashboard, use_case) = loaded_dashboard(FakeStockApi::default());
    let before = dashboard.clone();

    assert_eq!(commit(&mut dashboard, ""), None);
    assert_eq!(use_case.source().calls(), vec!["AAPL"]);
    assert_eq!(dashboard.series(), before.series());
    assert_eq!(dashboard.error(), before.error());
    assert_eq!(dashboard.committed().value(), "");
}

#[test]
fn stale_response_is_dropped_by_default() {
    Lazy::force(&LOGS);
    let api = FakeStockApi::default()
        .with("AAPL", Ok(aapl_records()))
        .with("IBM", Ok(vec![PriceRecord::new("2024-01-01 09:30", 1.0, 1.0, 1.0, 1.0, 1.0)]));
    let use_case = FetchSeriesUseCase::new(api);
    let mut dashboard = Dashboard::default();

    let slow = dashboard.mount().unwrap();
    let fast = commit(&mut dashboard, "ibm").unwrap();
    let slow_result = block_on(use_case.execute(&slow));
    let fast_result = block_on(use_case.execute(&fast));

    assert_eq!(dashboard.receive(fast.seq, fast_result), ResponseOutcome::Applied);
    assert_eq!(dashboard.receive(slow.seq, slow_result), ResponseOutcome::Discarded);
    assert_eq!(dashboard.series().records()[0].open, 1.0);
    assert!(LOGS.contains(&format!("Dropping stale response #{}", slow.seq)));
}

#[test]
fn last_resolved_policy_reproduces_overwrite_race() {
    let config = DashboardConfig::default().with_response_policy(ResponsePolicy::LastResolvedWins);
    let mut dashboard = Dashboard::new(&config);

    let slow = dashboard.mount().unwrap();
    let fast = commit(&mut dashboard, "ibm").unwrap();
    dashboard.receive(fast.seq, Ok(vec![PriceRecord::new("2024-01-01 09:31", 1.0, 1.0, 1.0, 1.0, 1.0)]));
    dashboard.receive(slow.seq, Ok(aapl_records()));

    assert_eq!(dashboard.series().records(), aapl_records().as_slice());
    assert_eq!(dashboard.committed().value(), "IBM");
}

#[test]
fn last_resolved_stale_error_replaces_status_line() {
    let config = DashboardConfig::default().with_response_policy(ResponsePolicy::LastResolvedWins);
    let mut dashboard = Dashboard::new(&config);

    let slow = dashboard.mount().unwrap();
    let fast = commit(&mut dashboard, "ibm").unwrap();
    dashboard.receive(fast.seq, Ok(aapl_records()));
    dashboard.receive(slow.seq, Err(FetchError::NotFound { status: 404 }));

    assert_eq!(dashboard.error(), Some("Stock not found"));
    assert_eq!(dashboard.phase(), &ViewPhase::Error);
    assert_eq!(dashboard.status(), "");
}
