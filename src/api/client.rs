//! API Client Module
//! Blocking HTTP access to the seaport directory and rate series endpoints.
//! Calls run on background threads; no timeout or retry is applied.

use crate::config::ApiConfig;
use crate::data::{RateRecord, Seaport};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Static key header expected by the upstream gateway.
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("Failed to decode API payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the freight-rate service.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Fetch the seaport directory. Called once per session.
    pub fn fetch_seaports(&self) -> Result<Vec<Seaport>, ApiError> {
        let ports: Vec<Seaport> = self.get_json(&self.config.ports_url(), &[])?;
        tracing::info!("Loaded {} seaports", ports.len());
        Ok(ports)
    }

    /// Fetch the daily rate series for a route.
    pub fn fetch_rates(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RateRecord>, ApiError> {
        let records: Vec<RateRecord> = self.get_json(
            &self.config.rates_url(),
            &[("origin", origin), ("destination", destination)],
        )?;
        tracing::info!(
            "Loaded {} rate records for {} -> {}",
            records.len(),
            origin,
            destination
        );
        Ok(records)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_and_url() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://rates.example.com/rates".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("/rates"));
    }

    #[test]
    fn decode_error_wraps_serde_message() {
        let serde_err = serde_json::from_str::<Vec<Seaport>>("{not json").unwrap_err();
        let err = ApiError::from(serde_err);
        assert!(err.to_string().starts_with("Failed to decode API payload"));
    }
}
