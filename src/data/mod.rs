//! Data module - domain model and series decomposition

mod model;
mod series;

pub use model::{RateRecord, RouteSelection, Seaport};
pub use series::{SeriesDecomposition, SeriesPoint};
