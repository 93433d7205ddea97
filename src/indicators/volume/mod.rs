//! Volume indicators: RVOL, CMF, MFI, VWAP

pub mod cmf;
pub mod mfi;
pub mod rvol;
pub mod vwap;

pub use cmf::*;
pub use mfi::*;
pub use rvol::*;
pub use vwap::*;
