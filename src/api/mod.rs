//! API module - remote freight-rate service access

mod client;

pub use client::{ApiClient, ApiError};
