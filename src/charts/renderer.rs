//! Static Chart Renderer
//! Renders the rate series to an in-memory PNG for export.
//!
//! Unlike the interactive plot, this variant uses a chronological x axis
//! (lower bound padded by one day) and the fixed export price domain.

use crate::data::SeriesPoint;
use chrono::{Duration, NaiveDate};
use image::DynamicImage;
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;

pub const EXPORT_WIDTH: u32 = 1280;
pub const EXPORT_HEIGHT: u32 = 640;

/// Padding applied below the lowest low and above the highest high.
const PRICE_PADDING: f64 = 100.0;

const LOW_COLOR: RGBColor = RGBColor(0x02, 0x80, 0x90);
const MEAN_COLOR: RGBColor = RGBColor(0xDE, 0xB8, 0x41);
const HIGH_COLOR: RGBColor = RGBColor(0xF4, 0x5B, 0x69);

const POINT_SIZE: u32 = 3;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to render: the series is empty")]
    EmptySeries,
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders export images of the rate series.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Draw the three series into an in-memory PNG of the given size.
    pub fn render_to_png_bytes(
        points: &[SeriesPoint],
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if points.is_empty() {
            return Err(RenderError::EmptySeries);
        }

        let (day_from, day_to) = Self::day_domain(points).ok_or(RenderError::EmptySeries)?;
        let (price_min, price_max) = Self::price_domain(points);

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            let mut chart = ChartBuilder::on(&root)
                .margin(15)
                .caption(title, ("sans-serif", 24.0).into_font())
                .x_label_area_size(70)
                .y_label_area_size(60)
                .build_cartesian_2d(day_from..day_to, price_min..price_max)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            chart
                .configure_mesh()
                .x_labels(points.len().min(10))
                .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
                .x_label_style(
                    ("sans-serif", 12)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .y_label_formatter(&|v: &f64| format!("{v:.0} €"))
                .y_label_style(("sans-serif", 12).into_font())
                .draw()
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            for (name, color, data) in [
                ("Low", LOW_COLOR, Self::series(points, |p| p.low)),
                ("Mean", MEAN_COLOR, Self::series(points, |p| p.mean)),
                ("High", HIGH_COLOR, Self::series(points, |p| p.high)),
            ] {
                chart
                    .draw_series(
                        LineSeries::new(data.iter().copied(), color.stroke_width(1))
                            .point_size(POINT_SIZE),
                    )
                    .map_err(|e| RenderError::Draw(e.to_string()))?
                    .label(name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                    });
            }

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        let img = image::RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| RenderError::Draw("pixel buffer size mismatch".to_string()))?;

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn series(points: &[SeriesPoint], pick: fn(&SeriesPoint) -> f64) -> Vec<(NaiveDate, f64)> {
        points.iter().map(|p| (p.day, pick(p))).collect()
    }

    /// Chronological domain, lower bound padded by one day.
    pub fn day_domain(points: &[SeriesPoint]) -> Option<(NaiveDate, NaiveDate)> {
        let first = points.first()?.day;
        let last = points.last()?.day;
        Some((first - Duration::days(1), last))
    }

    /// Vertical domain: lowest low minus padding up to highest high plus
    /// padding.
    pub fn price_domain(points: &[SeriesPoint]) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in points {
            min = min.min(p.low);
            max = max.max(p.high);
        }
        if min.is_infinite() {
            return (0.0, PRICE_PADDING);
        }
        (min - PRICE_PADDING, max + PRICE_PADDING)
    }
}
