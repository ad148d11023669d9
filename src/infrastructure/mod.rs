pub mod http;
pub mod rendering;
pub mod services;
pub mod timers;

pub use http::StockApiClient;
pub use timers::DebounceTimer;
