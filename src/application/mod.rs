pub mod config;
pub mod dashboard;
pub mod use_cases;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use use_cases::FetchSeriesUseCase;
