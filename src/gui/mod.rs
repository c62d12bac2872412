//! GUI module - User interface components

mod app;
mod chart_view;
mod port_picker;
mod route_panel;

pub use app::SsgApp;
pub use chart_view::{ChartView, ChartViewAction, ChartViewState};
pub use port_picker::PortPicker;
pub use route_panel::{RouteEnd, RoutePanel, RoutePanelAction};
