//! Domain Model Module
//! Seaports, daily rate records and the origin/destination route selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A maritime port as served by the ports endpoint.
/// The first two characters of the code denote the country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seaport {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Seaport {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Two-character country prefix of the port code.
    pub fn country_code(&self) -> &str {
        let end = self
            .code
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(self.code.len());
        &self.code[..end]
    }

    /// Directory entries without code or name cannot be selected.
    pub fn is_usable(&self) -> bool {
        !self.code.is_empty() && !self.name.is_empty()
    }
}

/// One day's observed low/mean/high freight price for a route.
///
/// Upstream data may carry nulls in any field; those are kept as `None` so
/// the series decomposition can flag the gap instead of rejecting the whole
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

impl RateRecord {
    pub fn new(day: &str, low: f64, mean: f64, high: f64) -> Self {
        Self {
            day: NaiveDate::parse_from_str(day, "%Y-%m-%d").ok(),
            low: Some(low),
            mean: Some(mean),
            high: Some(high),
        }
    }
}

/// Ordered pair of selected seaports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteSelection {
    pub from: Option<Seaport>,
    pub to: Option<Seaport>,
}

impl RouteSelection {
    pub fn select_from(&mut self, port: Seaport) {
        self.from = Some(port);
    }

    pub fn select_to(&mut self, port: Seaport) {
        self.to = Some(port);
    }

    /// Exchange origin and destination. Exact; applying it twice restores
    /// the starting selection.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Search is allowed only once both endpoints carry a non-empty code.
    pub fn search_enabled(&self) -> bool {
        let has_code = |p: &Option<Seaport>| {
            p.as_ref().map(|s| !s.code.is_empty()).unwrap_or(false)
        };
        has_code(&self.from) && has_code(&self.to)
    }

    /// True once at least one endpoint has been picked (enables swap/clear).
    pub fn any_selected(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether the given port code is already used on either end.
    pub fn uses_code(&self, code: &str) -> bool {
        let matches = |p: &Option<Seaport>| p.as_ref().map(|s| s.code == code).unwrap_or(false);
        matches(&self.from) || matches(&self.to)
    }

    /// Origin and destination codes, only when search is enabled.
    pub fn codes(&self) -> Option<(&str, &str)> {
        if !self.search_enabled() {
            return None;
        }
        match (&self.from, &self.to) {
            (Some(f), Some(t)) => Some((f.code.as_str(), t.code.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hamburg() -> Seaport {
        Seaport::new("DEHAM", "Hamburg")
    }

    fn shanghai() -> Seaport {
        Seaport::new("CNSHA", "Shanghai")
    }

    #[test]
    fn search_enabled_only_with_both_endpoints() {
        let mut route = RouteSelection::default();
        assert!(!route.search_enabled());
        assert!(route.codes().is_none());

        route.select_from(hamburg());
        assert!(!route.search_enabled());

        route.select_to(shanghai());
        assert!(route.search_enabled());
        assert_eq!(route.codes(), Some(("DEHAM", "CNSHA")));
    }

    #[test]
    fn empty_code_does_not_enable_search() {
        let mut route = RouteSelection::default();
        route.select_from(Seaport::new("", "Nowhere"));
        route.select_to(shanghai());
        assert!(!route.search_enabled());
    }

    #[test]
    fn swap_exchanges_exactly() {
        let mut route = RouteSelection::default();
        route.select_from(hamburg());
        route.select_to(shanghai());

        route.swap();
        assert_eq!(route.from, Some(shanghai()));
        assert_eq!(route.to, Some(hamburg()));

        route.swap();
        assert_eq!(route.from, Some(hamburg()));
        assert_eq!(route.to, Some(shanghai()));
    }

    #[test]
    fn swap_with_single_endpoint_moves_it() {
        let mut route = RouteSelection::default();
        route.select_from(hamburg());
        route.swap();
        assert_eq!(route.from, None);
        assert_eq!(route.to, Some(hamburg()));
    }

    #[test]
    fn clear_resets_selection_and_disables_search() {
        let mut route = RouteSelection::default();
        route.select_from(hamburg());
        route.select_to(shanghai());
        route.clear();
        assert_eq!(route, RouteSelection::default());
        assert!(!route.search_enabled());
        assert!(!route.any_selected());
    }

    #[test]
    fn uses_code_covers_both_ends() {
        let mut route = RouteSelection::default();
        route.select_from(hamburg());
        route.select_to(shanghai());
        assert!(route.uses_code("DEHAM"));
        assert!(route.uses_code("CNSHA"));
        assert!(!route.uses_code("NLRTM"));
    }

    #[test]
    fn country_code_is_two_char_prefix() {
        assert_eq!(hamburg().country_code(), "DE");
        assert_eq!(Seaport::new("X", "Short").country_code(), "X");
        assert_eq!(Seaport::new("", "None").country_code(), "");
    }

    #[test]
    fn rate_record_deserializes_with_nulls() {
        let record: RateRecord =
            serde_json::from_str(r#"{"day":"2021-01-01","low":null,"mean":120.0,"high":140.0}"#)
                .unwrap();
        assert_eq!(record.day, NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(record.low, None);
        assert_eq!(record.mean, Some(120.0));
    }

    #[test]
    fn rate_record_deserializes_with_missing_fields() {
        let record: RateRecord = serde_json::from_str(r#"{"day":"2021-01-01"}"#).unwrap();
        assert!(record.low.is_none() && record.mean.is_none() && record.high.is_none());
    }
}
