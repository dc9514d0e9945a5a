//! Provides [`PvWattsClient`], a blocking client for the NREL PVWatts v5 hourly endpoint.

use crate::dates::date_table::DateTable;
use crate::pvwatts::error::FetchError;
use crate::pvwatts::response::PvWattsResponse;
use crate::types::table::Table;
use bon::bon;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::borrow::Cow;
use url::Url;

/// Production endpoint of the PVWatts v5 API.
pub const PVWATTS_URL: &str = "https://developer.nrel.gov/api/pvwatts/v5.json";

/// Array tilt in degrees used when none is given.
pub const DEFAULT_TILT: f64 = 20.0;

/// System losses in percent used when none are given.
pub const DEFAULT_LOSSES: f64 = 14.0;

const AZIMUTH: &str = "180";
const ARRAY_TYPE: &str = "0";
const MODULE_TYPE: &str = "0";
const TIMEFRAME: &str = "hourly";

/// A reusable client for requesting hourly PVWatts simulations.
///
/// Every call to [`PvWattsClient::fetch`] issues exactly one blocking GET request.
/// There is no retry, no timeout beyond what the supplied `reqwest` client is configured
/// with, and nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use pvfeed::{FetchError, PvWattsClient};
///
/// # fn main() -> Result<(), FetchError> {
/// let client = PvWattsClient::new();
/// let table = client
///     .fetch("DEMO_KEY", "Boulder, CO", 4000.0)
///     .tilt(30.0)
///     .call()?;
/// assert_eq!(table.len(), 8760);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PvWattsClient {
    http: Client,
    base_url: String,
}

impl Default for PvWattsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl PvWattsClient {
    /// Creates a client targeting the public PVWatts endpoint.
    pub fn new() -> Self {
        Self::with_base_url(PVWATTS_URL)
    }

    /// Creates a client targeting another PVWatts-compatible endpoint, such as a mirror
    /// or a local test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    /// Uses a preconfigured `reqwest` blocking client, e.g. one with a timeout or proxy.
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the query URL for a system without sending anything.
    ///
    /// `panel_watts` is converted to kilowatts for the `system_capacity` parameter.
    /// Azimuth (180), array type (0), module type (0) and the hourly timeframe are fixed.
    ///
    /// # Errors
    ///
    /// * [`FetchError::InvalidCapacity`] if `panel_watts` is not a positive, finite number.
    /// * [`FetchError::InvalidUrl`] if the client's base URL cannot be parsed.
    #[builder(start_fn = request_url)]
    #[doc(hidden)]
    pub fn build_request_url(
        &self,
        #[builder(start_fn)] api_key: &str,
        #[builder(start_fn)] address: &str,
        #[builder(start_fn)] panel_watts: f64,
        #[builder(default = DEFAULT_TILT)] tilt: f64,
        #[builder(default = DEFAULT_LOSSES)] losses: f64,
    ) -> Result<Url, FetchError> {
        if !panel_watts.is_finite() || panel_watts <= 0.0 {
            return Err(FetchError::InvalidCapacity(panel_watts));
        }
        let capacity_kw = panel_watts / 1000.0;

        Url::parse_with_params(
            &self.base_url,
            &[
                ("api_key", api_key.to_string()),
                ("address", address.to_string()),
                ("system_capacity", format!("{:.6}", capacity_kw)),
                ("azimuth", AZIMUTH.to_string()),
                ("tilt", format!("{:.6}", tilt)),
                ("array_type", ARRAY_TYPE.to_string()),
                ("module_type", MODULE_TYPE.to_string()),
                ("losses", format!("{:.6}", losses)),
                ("timeframe", TIMEFRAME.to_string()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(self.base_url.clone(), e))
    }

    /// Fetches one year of hourly PVWatts output and stamps it onto a calendar.
    ///
    /// The returned table always has exactly as many rows as the date table: the
    /// first three columns are copied from it and the remaining eight are the
    /// `dn, df, tamb, wspd, poa, tcell, dc, ac` arrays of the response.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.tilt(f64)`: Array tilt in degrees (default: 20.0).
    /// * `.losses(f64)`: System losses in percent (default: 14.0).
    /// * `.use_cache(bool)`: Accepted for compatibility and ignored. Every call
    ///   performs a request.
    /// * `.date_table(&DateTable)`: Calendar to stamp the results onto
    ///   (default: [`DateTable::typical_year`]).
    ///
    /// # Errors
    ///
    /// * [`FetchError::NetworkRequest`] / [`FetchError::HttpStatus`] if the request fails.
    ///   The wrapped `reqwest` errors carry no URL, so the API key never leaks through them.
    /// * [`FetchError::ApiErrors`] if the body carries a non-empty PVWatts `errors` list,
    ///   whatever the status.
    /// * [`FetchError::JsonParse`], [`FetchError::MissingOutputs`],
    ///   [`FetchError::MissingArray`], [`FetchError::InvalidArray`] or
    ///   [`FetchError::LengthMismatch`] if the body does not fit the calendar.
    ///   No partial table is ever returned.
    #[builder(start_fn = fetch)]
    #[doc(hidden)]
    pub fn build_fetch(
        &self,
        #[builder(start_fn)] api_key: &str,
        #[builder(start_fn)] address: &str,
        #[builder(start_fn)] panel_watts: f64,
        #[builder(default = DEFAULT_TILT)] tilt: f64,
        #[builder(default = DEFAULT_LOSSES)] losses: f64,
        #[builder(default = true)] use_cache: bool,
        date_table: Option<&DateTable>,
    ) -> Result<Table, FetchError> {
        let url = self
            .request_url(api_key, address, panel_watts)
            .tilt(tilt)
            .losses(losses)
            .call()?;
        let shown_url = redact_api_key(&url);
        debug!("use_cache={} has no effect, requesting fresh data", use_cache);
        info!("Requesting PVWatts hourly data from {}", shown_url);

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| FetchError::NetworkRequest(shown_url.clone(), e.without_url()))?;

        let status = response.status();
        let status_error = response.error_for_status_ref().err();
        if let Some(e) = status_error {
            let e = e.without_url();
            warn!("HTTP error for {}: {:?}", shown_url, e);
            // PVWatts explains rejected inputs in the body of 4xx responses.
            if let Some(errors) = response.text().ok().and_then(|body| api_errors(&body)) {
                return Err(FetchError::ApiErrors(errors));
            }
            return Err(FetchError::HttpStatus {
                url: shown_url,
                status,
                source: e,
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::NetworkRequest(shown_url.clone(), e.without_url()))?;

        let dates = match date_table {
            Some(dates) => Cow::Borrowed(dates),
            None => Cow::Owned(DateTable::typical_year()),
        };
        let table = PvWattsResponse::from_json(&body)?.into_table(&dates)?;
        info!(
            "Received {} hourly rows for '{}' ({} W)",
            table.len(),
            address,
            panel_watts
        );
        Ok(table)
    }
}

/// The non-empty `errors` array of an error body, if it has one.
fn api_errors(body: &str) -> Option<Vec<String>> {
    PvWattsResponse::from_json(body)
        .ok()
        .map(|response| response.errors)
        .filter(|errors| !errors.is_empty())
}

/// Renders `url` for logs and error messages with the API key masked.
fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
