//! Seaport freight-rate dashboard library.
//!
//! The binary in `main.rs` wires these modules into the eframe window; the
//! non-GUI layers (config, API access, series decomposition, export) are
//! exposed here for integration tests.

pub mod api;
pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;

pub use api::{ApiClient, ApiError};
pub use config::ApiConfig;
pub use data::{RateRecord, RouteSelection, Seaport, SeriesDecomposition};
