//! Export Module
//! Writes the rendered chart as a PNG file with a generated name.

use crate::charts::{RenderError, StaticChartRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::data::SeriesPoint;
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write PNG: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds export filenames and writes chart PNGs.
pub struct Exporter;

impl Exporter {
    /// `ssg-export-<from>-<to>[-<dateFrom>][-<dateTo>]-<uuid>.png`.
    /// Date parts are skipped when absent; the uuid suffix avoids collisions
    /// between repeated exports of the same route.
    pub fn export_filename(
        from: &str,
        to: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> String {
        let mut name = format!("ssg-export-{from}-{to}");
        if let Some(day) = date_from {
            name.push_str(&format!("-{}", day.format("%Y-%m-%d")));
        }
        if let Some(day) = date_to {
            name.push_str(&format!("-{}", day.format("%Y-%m-%d")));
        }
        format!("{name}-{}.png", Uuid::new_v4())
    }

    /// Render the series and write it to `path`.
    pub fn write_png(points: &[SeriesPoint], title: &str, path: &Path) -> Result<(), ExportError> {
        let bytes =
            StaticChartRenderer::render_to_png_bytes(points, title, EXPORT_WIDTH, EXPORT_HEIGHT)?;
        std::fs::write(path, bytes)?;
        tracing::info!("Exported chart to {}", path.display());
        Ok(())
    }

    /// Show the exported file with the system default viewer.
    pub fn open_with_default_app(path: &Path) {
        if let Err(e) = open::that(path) {
            tracing::warn!("Could not open exported file: {}", e);
        }
    }
}
