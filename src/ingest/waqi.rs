/// WAQI (World Air Quality Index project) Data API Client
///
/// Retrieves current station readings inside a bounding box for the map,
/// and the detailed feed (individual pollutants, weather, forecast) for a
/// single station when the side panel opens.
///
/// API Documentation: https://aqicn.org/json-api/doc/
/// Map bounds:   {base}/map/bounds/?latlng={south,west,north,east}&token={token}
/// Station feed: {base}/feed/@{uid}/?token={token}
///
/// Every response is wrapped in `{"status": "ok" | "error", "data": ...}`.
/// On error, `data` is a message string such as "Invalid key".

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::WaqiConfig;
use crate::model::{Position, StationFeed, StationId, StationReading, WaqiError};

// ============================================================================
// WAQI API Response Structures
// ============================================================================

/// Response envelope shared by all endpoints. `data` is left untyped until
/// `status` has been checked.
#[derive(Debug, Deserialize)]
pub struct WaqiEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Value,
}

/// One entry of the `map/bounds` response.
#[derive(Debug, Deserialize)]
pub struct WaqiBoundsStation {
    pub uid: StationId,
    pub lat: f64,
    pub lon: f64,
    /// Usually a string ("57" or "-"), occasionally a bare number.
    #[serde(default)]
    pub aqi: Value,
    pub station: WaqiStationInfo,
}

#[derive(Debug, Deserialize)]
pub struct WaqiStationInfo {
    pub name: String,
    #[serde(default)]
    pub time: String,
}

// ============================================================================
// URL Construction
// ============================================================================

pub fn build_bounds_url(base_url: &str, latlng: &str, token: &str) -> String {
    format!(
        "{}/map/bounds/?latlng={}&token={}",
        base_url.trim_end_matches('/'),
        latlng,
        token
    )
}

pub fn build_feed_url(base_url: &str, uid: &StationId, token: &str) -> String {
    format!(
        "{}/feed/@{}/?token={}",
        base_url.trim_end_matches('/'),
        uid,
        token
    )
}

// ============================================================================
// Response Parsing
// ============================================================================

fn unwrap_envelope(body: &str) -> Result<Value, WaqiError> {
    let envelope: WaqiEnvelope =
        serde_json::from_str(body).map_err(|e| WaqiError::ParseError(e.to_string()))?;

    if envelope.status != "ok" {
        let message = match envelope.data {
            Value::String(s) => s,
            Value::Null => format!("status '{}'", envelope.status),
            other => other.to_string(),
        };
        return Err(WaqiError::ApiStatus(message));
    }
    Ok(envelope.data)
}

/// Parses a `map/bounds` response body into station readings.
///
/// The `aqi` field is kept as raw text; sentinel values such as `"-"` are
/// preserved for downstream parsing rather than dropped here.
pub fn parse_bounds_response(body: &str) -> Result<Vec<StationReading>, WaqiError> {
    let data = unwrap_envelope(body)?;
    let stations: Vec<WaqiBoundsStation> =
        serde_json::from_value(data).map_err(|e| WaqiError::ParseError(e.to_string()))?;

    Ok(stations.into_iter().map(into_reading).collect())
}

fn into_reading(station: WaqiBoundsStation) -> StationReading {
    let index = match station.aqi {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    };
    StationReading {
        id: station.uid,
        position: Position::new(station.lat, station.lon),
        index,
        label: station.station.name,
        observed_at: station.station.time,
    }
}

/// Parses a `feed/@{uid}` response body.
pub fn parse_feed_response(body: &str) -> Result<StationFeed, WaqiError> {
    let data = unwrap_envelope(body)?;
    serde_json::from_value(data).map_err(|e| WaqiError::ParseError(e.to_string()))
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the blocking client used for all WAQI calls.
pub fn build_client(config: &WaqiConfig) -> Result<reqwest::blocking::Client, WaqiError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| WaqiError::RequestFailed(e.to_string()))
}

fn get_body(client: &reqwest::blocking::Client, url: &str) -> Result<String, WaqiError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WaqiError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WaqiError::HttpError(response.status().as_u16()));
    }

    response
        .text()
        .map_err(|e| WaqiError::RequestFailed(e.to_string()))
}

fn require_token(config: &WaqiConfig) -> Result<&str, WaqiError> {
    config.token.as_deref().ok_or(WaqiError::MissingToken)
}

/// Fetch every station inside the configured bounds
///
/// # Parameters
/// - `client`: HTTP client
/// - `config`: base URL, bounds and token
///
/// # Returns
/// One reading per station, including stations currently reporting no data
pub fn fetch_stations(
    client: &reqwest::blocking::Client,
    config: &WaqiConfig,
) -> Result<Vec<StationReading>, WaqiError> {
    let token = require_token(config)?;
    let url = build_bounds_url(&config.base_url, &config.bounds, token);
    let body = get_body(client, &url)?;
    parse_bounds_response(&body)
}

/// Fetch the detailed feed for one station
pub fn fetch_station_feed(
    client: &reqwest::blocking::Client,
    config: &WaqiConfig,
    uid: &StationId,
) -> Result<StationFeed, WaqiError> {
    let token = require_token(config)?;
    let url = build_feed_url(&config.base_url, uid, token);
    let body = get_body(client, &url)?;
    parse_feed_response(&body)
}

// ============================================================================
// Tests
// ============================================================================
