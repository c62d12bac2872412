//! Route Panel Widget
//! Origin/destination selection row with swap, search and clear controls,
//! plus the dismissible API error banner.

use crate::data::{RouteSelection, Seaport};
use egui::{Color32, RichText};

const ERROR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Which endpoint a picker dialog is being opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEnd {
    From,
    To,
}

impl RouteEnd {
    pub fn label(&self) -> &'static str {
        match self {
            RouteEnd::From => "From",
            RouteEnd::To => "To",
        }
    }
}

/// Actions triggered by the route panel
#[derive(Debug, Clone, PartialEq)]
pub enum RoutePanelAction {
    None,
    Pick(RouteEnd),
    Swap,
    Search,
    Clear,
    DismissError,
}

/// Route selection controls. The selection itself lives here; the app reads
/// it when issuing fetches.
#[derive(Default)]
pub struct RoutePanel {
    pub route: RouteSelection,
}

impl RoutePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the selector row. `is_fetching` disables the search trigger while
    /// a request is in flight.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        is_fetching: bool,
        api_error: Option<&str>,
    ) -> RoutePanelAction {
        let mut action = RoutePanelAction::None;

        ui.label(RichText::new("Select route").size(16.0).strong());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if Self::endpoint_button(ui, RouteEnd::From, self.route.from.as_ref()) {
                action = RoutePanelAction::Pick(RouteEnd::From);
            }

            ui.add_enabled_ui(self.route.any_selected(), |ui| {
                if ui
                    .button(RichText::new("⇄").size(16.0))
                    .on_hover_text("Swap origin and destination")
                    .clicked()
                {
                    action = RoutePanelAction::Swap;
                }
            });

            if Self::endpoint_button(ui, RouteEnd::To, self.route.to.as_ref()) {
                action = RoutePanelAction::Pick(RouteEnd::To);
            }

            ui.add_space(10.0);

            let search_enabled = self.route.search_enabled() && !is_fetching;
            ui.add_enabled_ui(search_enabled, |ui| {
                let text = if is_fetching { "Loading..." } else { "Search" };
                let button = egui::Button::new(RichText::new(text).size(14.0))
                    .min_size(egui::vec2(90.0, 28.0));
                if ui.add(button).clicked() {
                    action = RoutePanelAction::Search;
                }
            });

            ui.add_enabled_ui(self.route.any_selected(), |ui| {
                if ui.button("✖ Clear").clicked() {
                    action = RoutePanelAction::Clear;
                }
            });
        });

        if let Some(message) = api_error {
            ui.add_space(8.0);
            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .stroke(egui::Stroke::new(1.0, ERROR_RED))
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(message).color(ERROR_RED).size(12.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✖").clicked() {
                                action = RoutePanelAction::DismissError;
                            }
                        });
                    });
                });
        }

        action
    }

    /// One endpoint button: country badge + port name, or the placeholder
    /// label while unset. Returns true when clicked.
    fn endpoint_button(ui: &mut egui::Ui, end: RouteEnd, selected: Option<&Seaport>) -> bool {
        let text = match selected {
            Some(port) => format!("🚢 [{}] {} ({})", port.country_code(), port.name, port.code),
            None => format!("🚢 {}", end.label()),
        };
        let button = egui::Button::new(RichText::new(text).size(13.0))
            .min_size(egui::vec2(190.0, 28.0));
        ui.add(button).clicked()
    }
}
