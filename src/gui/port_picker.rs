//! Port Picker Dialog
//! Modal seaport list with a name/code filter, opened from either route
//! button.

use crate::data::{RouteSelection, Seaport};
use crate::gui::RouteEnd;
use egui::{RichText, ScrollArea};

/// Modal seaport selection dialog.
pub struct PortPicker {
    open: bool,
    target: RouteEnd,
    filter: String,
}

impl Default for PortPicker {
    fn default() -> Self {
        Self {
            open: false,
            target: RouteEnd::From,
            filter: String::new(),
        }
    }
}

impl PortPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for one route end. The filter resets on every open.
    pub fn open_for(&mut self, target: RouteEnd) {
        self.open = true;
        self.target = target;
        self.filter.clear();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Draw the dialog when open. Returns the chosen seaport and target end
    /// on selection. Ports missing code or name, and ports already used on
    /// either end of the route, are hidden.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        seaports: &[Seaport],
        route: &RouteSelection,
    ) -> Option<(RouteEnd, Seaport)> {
        if !self.open || seaports.is_empty() {
            return None;
        }

        let mut selection = None;
        let mut keep_open = true;
        let target = self.target;

        egui::Window::new(format!("Select {} seaport", target.label().to_lowercase()))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("🔍");
                    ui.text_edit_singleline(&mut self.filter);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            keep_open = false;
                        }
                    });
                });
                ui.separator();

                let filter = self.filter.to_lowercase();
                ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    for port in seaports {
                        if !port.is_usable() || route.uses_code(&port.code) {
                            continue;
                        }
                        if !filter.is_empty()
                            && !port.name.to_lowercase().contains(&filter)
                            && !port.code.to_lowercase().contains(&filter)
                        {
                            continue;
                        }

                        let row = format!("[{}] {}", port.country_code(), port.name);
                        if ui
                            .add_sized(
                                [320.0, 22.0],
                                egui::Button::new(RichText::new(row).size(13.0)),
                            )
                            .clicked()
                        {
                            selection = Some((target, port.clone()));
                            keep_open = false;
                        }
                    }
                });
            });

        self.open = keep_open;
        selection
    }
}
