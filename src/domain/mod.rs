pub mod chart;
pub mod dashboard;
pub mod errors;
pub mod logging;
pub mod market_data;
