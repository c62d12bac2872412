//! Charts module - interactive plot and static export rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};
