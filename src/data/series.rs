//! Series Decomposition Module
//! Splits the fetched rate records into the parallel arrays the charts plot.

use crate::data::model::RateRecord;
use chrono::NaiveDate;

/// A fully populated data point, produced only when the series has no gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub day: NaiveDate,
    pub low: f64,
    pub mean: f64,
    pub high: f64,
}

/// Four index-aligned sequences derived from the record list.
///
/// `incomplete` is set when any sequence carries a missing value at any
/// position; the chart is suppressed in that case and a status message shown
/// instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesDecomposition {
    pub days: Vec<Option<NaiveDate>>,
    pub lows: Vec<Option<f64>>,
    pub means: Vec<Option<f64>>,
    pub highs: Vec<Option<f64>>,
    pub incomplete: bool,
}

impl SeriesDecomposition {
    /// Decompose a record list. Output arrays always match the input length.
    pub fn from_records(records: &[RateRecord]) -> Self {
        let mut decomposition = Self {
            days: Vec::with_capacity(records.len()),
            lows: Vec::with_capacity(records.len()),
            means: Vec::with_capacity(records.len()),
            highs: Vec::with_capacity(records.len()),
            incomplete: false,
        };

        for record in records {
            decomposition.days.push(record.day);
            decomposition.lows.push(record.low);
            decomposition.means.push(record.mean);
            decomposition.highs.push(record.high);

            if record.day.is_none()
                || record.low.is_none()
                || record.mean.is_none()
                || record.high.is_none()
            {
                decomposition.incomplete = true;
            }
        }

        decomposition
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The aligned data points, available only for a complete non-empty
    /// series.
    pub fn complete_points(&self) -> Option<Vec<SeriesPoint>> {
        if self.incomplete || self.is_empty() {
            return None;
        }

        let points = self
            .days
            .iter()
            .zip(&self.lows)
            .zip(&self.means)
            .zip(&self.highs)
            .map(|(((day, low), mean), high)| {
                Some(SeriesPoint {
                    day: (*day)?,
                    low: (*low)?,
                    mean: (*mean)?,
                    high: (*high)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(points)
    }

    /// First and last day of the series, used for the options row and the
    /// export filename.
    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let first = self.days.first().copied().flatten();
        let last = self.days.last().copied().flatten();
        (first, last)
    }
}
