//! Spreads scan domain — margin/stability ranking of actively traded items.

pub mod client;
pub mod wire;

pub use wire::{SpreadSortBy, SpreadsScanRequest, SpreadsScanResponse, SpreadsScanResult};
