//! Screening passes over a sector universe.

pub mod cancel;
pub mod sector;
pub mod universe;

pub use cancel::CancelToken;
pub use sector::{merge_outcomes, SectorScreener};
pub use universe::{parse_ticker_list, ScanItem, ScanScope, Sector, SectorUniverse, MANUAL_SECTOR};
