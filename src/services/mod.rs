//! Data-access collaborators.

pub mod json_store;
pub mod market_data;

pub use json_store::JsonDirectoryMarketData;
pub use market_data::{DataUnavailable, InMemoryMarketData, MarketDataProvider};
