//! Chart Plotter Module
//! Interactive rate-series chart using egui_plot.

use crate::data::SeriesPoint;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Fixed per-series colors, shared with the static renderer.
pub const LOW_COLOR: Color32 = Color32::from_rgb(0x02, 0x80, 0x90);
pub const MEAN_COLOR: Color32 = Color32::from_rgb(0xDE, 0xB8, 0x41);
pub const HIGH_COLOR: Color32 = Color32::from_rgb(0xF4, 0x5B, 0x69);

/// Emphasis color for the hovered point.
const HOVER_COLOR: Color32 = Color32::from_rgb(0, 191, 255);

const POINT_RADIUS: f32 = 3.0;
const HOVER_RADIUS: f32 = 6.0;

/// Draws the low/mean/high series over an ordinal day axis.
pub struct ChartPlotter;

struct SeriesDef<'a> {
    name: &'a str,
    color: Color32,
    values: Vec<f64>,
}

impl ChartPlotter {
    /// Render the chart into the given ui. One marker and one polyline per
    /// series; x is the day index, labeled with the calendar date.
    pub fn draw_rate_chart(ui: &mut egui::Ui, points: &[SeriesPoint], height: f32) {
        let x_labels: Vec<String> = points
            .iter()
            .map(|p| p.day.format("%Y-%m-%d").to_string())
            .collect();

        let series = [
            SeriesDef {
                name: "Low",
                color: LOW_COLOR,
                values: points.iter().map(|p| p.low).collect(),
            },
            SeriesDef {
                name: "Mean",
                color: MEAN_COLOR,
                values: points.iter().map(|p| p.mean).collect(),
            },
            SeriesDef {
                name: "High",
                color: HIGH_COLOR,
                values: points.iter().map(|p| p.high).collect(),
            },
        ];

        Plot::new("rate_chart")
            .height(height)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Day")
            .y_axis_label("Price")
            .x_axis_formatter(move |mark, _range| {
                if mark.value < 0.0 || mark.value.fract() != 0.0 {
                    return String::new();
                }
                x_labels
                    .get(mark.value as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .y_axis_formatter(|mark, _range| format!("{:.0} €", mark.value))
            .show(ui, |plot_ui| {
                for def in &series {
                    let line_points: PlotPoints = def
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();
                    plot_ui.line(
                        Line::new(line_points)
                            .color(def.color)
                            .width(1.0)
                            .name(def.name),
                    );

                    let marker_points: PlotPoints = def
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();
                    plot_ui.points(
                        Points::new(marker_points)
                            .radius(POINT_RADIUS)
                            .color(def.color)
                            .name(def.name),
                    );
                }

                // Hover emphasis: enlarge and recolor the nearest marker.
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    if let Some((x, y)) = Self::nearest_point(&series, pointer.x, pointer.y) {
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![[x, y]]))
                                .radius(HOVER_RADIUS)
                                .color(HOVER_COLOR),
                        );
                    }
                }
            });
    }

    /// The marker closest to the pointer, if the pointer sits within half a
    /// day column. Picks the series value nearest on the y axis.
    fn nearest_point(series: &[SeriesDef<'_>], px: f64, py: f64) -> Option<(f64, f64)> {
        let len = series.first().map(|s| s.values.len()).unwrap_or(0);
        if len == 0 {
            return None;
        }

        let idx = px.round();
        if idx < 0.0 || idx >= len as f64 || (px - idx).abs() > 0.5 {
            return None;
        }

        series
            .iter()
            .filter_map(|s| s.values.get(idx as usize).copied())
            .map(|v| (idx, v))
            .min_by(|a, b| {
                let da = (a.1 - py).abs();
                let db = (b.1 - py).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}
