//! Chart View Widget
//! Chart area with status messages, plus the options row (derived date range
//! and PNG export).

use crate::charts::ChartPlotter;
use crate::data::SeriesDecomposition;
use chrono::NaiveDate;
use egui::{Color32, RichText};

const CHART_HEIGHT: f32 = 320.0;

// Status panel texts
const STATUS_INITIAL: (&str, &str) = ("SSG Dashboard", "Select a route.");
const STATUS_LOADING: (&str, &str) = ("Loading...", "");
const STATUS_FAILED: (&str, &str) = ("Oh, no! Something went wrong.", "Try a different route.");
const STATUS_NO_RECORDS: (&str, &str) = ("Sorry, no records found.", "Try a different route.");
const STATUS_INCOMPLETE: (&str, &str) = ("Sorry, this series has gaps.", "Try a different route.");

/// Actions triggered by the chart view
#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewAction {
    None,
    ExportPng,
}

/// Everything the view needs from the app for one frame.
pub struct ChartViewState<'a> {
    pub decomposition: &'a SeriesDecomposition,
    pub is_fetching: bool,
    pub has_error: bool,
    pub has_fetched: bool,
    pub export_enabled: bool,
}

/// Chart display area. Keeps the editable date-range fields and the export
/// status line.
#[derive(Default)]
pub struct ChartView {
    pub date_from: String,
    pub date_to: String,
    pub status: String,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the date fields from a freshly fetched series.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        self.date_to = to.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    }

    pub fn clear(&mut self) {
        self.date_from.clear();
        self.date_to.clear();
        self.status.clear();
    }

    /// The date fields as parsed dates; invalid edits yield `None` and are
    /// simply dropped from the export filename.
    pub fn parsed_dates(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
        (parse(&self.date_from), parse(&self.date_to))
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &ChartViewState<'_>) -> ChartViewAction {
        let mut action = ChartViewAction::None;

        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_min_height(CHART_HEIGHT);

                match state.decomposition.complete_points() {
                    Some(points) if !state.is_fetching && !state.has_error => {
                        ChartPlotter::draw_rate_chart(ui, &points, CHART_HEIGHT);
                    }
                    _ => {
                        Self::draw_status_message(ui, state);
                    }
                }
            });

        if !state.is_fetching
            && !state.has_error
            && state.decomposition.complete_points().is_some()
        {
            ui.add_space(8.0);
            action = self.draw_options_row(ui, state.export_enabled);
        }

        action
    }

    fn draw_status_message(ui: &mut egui::Ui, state: &ChartViewState<'_>) {
        let (primary, secondary) = if state.is_fetching {
            STATUS_LOADING
        } else if state.has_error {
            STATUS_FAILED
        } else if !state.has_fetched {
            STATUS_INITIAL
        } else if state.decomposition.is_empty() {
            STATUS_NO_RECORDS
        } else {
            STATUS_INCOMPLETE
        };

        ui.vertical_centered(|ui| {
            ui.add_space(CHART_HEIGHT / 3.0);
            ui.label(RichText::new(primary).size(24.0).strong());
            if !secondary.is_empty() {
                ui.label(RichText::new(secondary).size(13.0).color(Color32::GRAY));
            }
            if state.is_fetching {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
    }

    /// Date range fields and the export trigger.
    fn draw_options_row(&mut self, ui: &mut egui::Ui, export_enabled: bool) -> ChartViewAction {
        let mut action = ChartViewAction::None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("From").size(12.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.date_from)
                    .desired_width(90.0)
                    .hint_text("yyyy-mm-dd"),
            );
            ui.label(RichText::new("To").size(12.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.date_to)
                    .desired_width(90.0)
                    .hint_text("yyyy-mm-dd"),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(export_enabled, |ui| {
                    if ui.button("⬇ Save as PNG").clicked() {
                        action = ChartViewAction::ExportPng;
                    }
                });

                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));
                }
            });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_round_trips_through_fields() {
        let mut view = ChartView::new();
        view.set_date_range(
            NaiveDate::from_ymd_opt(2021, 1, 1),
            NaiveDate::from_ymd_opt(2021, 1, 31),
        );
        assert_eq!(view.date_from, "2021-01-01");
        assert_eq!(view.date_to, "2021-01-31");
        assert_eq!(
            view.parsed_dates(),
            (
                NaiveDate::from_ymd_opt(2021, 1, 1),
                NaiveDate::from_ymd_opt(2021, 1, 31)
            )
        );
    }

    #[test]
    fn invalid_date_edits_parse_to_none() {
        let mut view = ChartView::new();
        view.date_from = "01/05/2021".to_string();
        view.date_to = "2021-02-30".to_string();
        assert_eq!(view.parsed_dates(), (None, None));
    }

    #[test]
    fn clear_resets_fields_and_status() {
        let mut view = ChartView::new();
        view.set_date_range(NaiveDate::from_ymd_opt(2021, 1, 1), None);
        view.status = "Exported".to_string();
        view.clear();
        assert!(view.date_from.is_empty());
        assert!(view.date_to.is_empty());
        assert!(view.status.is_empty());
    }
}
