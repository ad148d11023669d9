//! Market data aggregate: tickers, metrics and OHLCV records.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::PriceSeriesSource;
pub use value_objects::*;
