//! Dump-detector scan domain — filter configuration and results.
//!
//! The scan itself runs server-side; this slice carries the filter payload
//! and the flagged-item rows back and forth.

pub mod client;
pub mod wire;

pub use wire::{
    BaselineStat, EventPriceMode, ScanRequest, ScanResponse, ScanResult, SortBy, VolumeMode,
};
