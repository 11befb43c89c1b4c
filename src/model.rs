/// StationReading, StationFeed, WaqiError
/// Core data types for the AIRA air quality service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O. The only logic here is defensive parsing of the raw
/// index text and coordinate range checks, since every consumer needs them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Station identity and position
// ---------------------------------------------------------------------------

/// Opaque station identifier. WAQI sends numeric `uid`s, but the model
/// accepts text identifiers too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Numeric(n) => write!(f, "{}", n),
            StationId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for StationId {
    fn from(n: u64) -> Self {
        StationId::Numeric(n)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        StationId::Text(s.to_string())
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180]. NaN fails both.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// One station's current measurement, as shown on the map.
///
/// Built from one entry of the WAQI `map/bounds` response. `index` keeps the
/// provider's raw text because stations without data report a sentinel such
/// as `"-"`; use [`StationReading::parsed_index`] to get a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    pub id: StationId,
    pub position: Position,
    pub index: String,
    pub label: String,
    pub observed_at: String, // display only, e.g. "2024-05-01T12:00:00+07:00"
}

impl StationReading {
    pub fn parsed_index(&self) -> Option<u32> {
        parse_index(&self.index)
    }
}

/// Parses a raw pollutant index.
///
/// Accepts only a plain non-negative integer (surrounding whitespace is
/// ignored). Sentinels, signs, decimals, and values that overflow `u32`
/// yield `None`. `"0"` is a real reading and yields `Some(0)`.
pub fn parse_index(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

// ---------------------------------------------------------------------------
// Station detail feed
// ---------------------------------------------------------------------------

/// A single individual-AQI value, `{ "v": 12.3 }` in the WAQI payload.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct IaqiValue {
    pub v: f64,
}

/// Individual pollutant and weather readings for one station.
/// Any field may be missing; stations report different subsets.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Iaqi {
    pub co: Option<IaqiValue>,
    pub h: Option<IaqiValue>, // humidity
    pub no2: Option<IaqiValue>,
    pub o3: Option<IaqiValue>,
    pub p: Option<IaqiValue>, // pressure
    pub pm10: Option<IaqiValue>,
    pub pm25: Option<IaqiValue>,
    pub so2: Option<IaqiValue>,
    pub t: Option<IaqiValue>, // temperature
    pub w: Option<IaqiValue>, // wind
    pub wg: Option<IaqiValue>, // wind gust
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDay {
    pub avg: u32,
    pub day: String, // "YYYY-MM-DD"
    pub max: u32,
    pub min: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub pm25: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub daily: DailyForecast,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedTime {
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub tz: String,
    #[serde(default)]
    pub v: i64,
}

/// Detailed feed for one station, from the WAQI `feed/@{uid}` endpoint.
///
/// `aqi` is `None` when the provider reports the `"-"` sentinel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationFeed {
    #[serde(default, deserialize_with = "deserialize_lenient_index")]
    pub aqi: Option<u32>,
    pub idx: StationId,
    pub city: City,
    #[serde(default)]
    pub dominentpol: String,
    #[serde(default)]
    pub iaqi: Iaqi,
    #[serde(default)]
    pub forecast: Forecast,
    #[serde(default)]
    pub time: FeedTime,
}

/// Accepts a JSON number or string for an index field and runs it through
/// [`parse_index`]. Anything else becomes `None` rather than an error.
fn deserialize_lenient_index<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => parse_index(&s),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or processing WAQI data.
#[derive(Debug, PartialEq)]
pub enum WaqiError {
    /// Transport failure before any HTTP status was received.
    RequestFailed(String),
    /// Non-2xx HTTP response from the WAQI API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The envelope carried `status` other than `"ok"`; holds the
    /// provider's message (e.g. "Invalid key").
    ApiStatus(String),
    /// No API token was configured locally; nothing was sent.
    MissingToken,
}

impl fmt::Display for WaqiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaqiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            WaqiError::HttpError(code) => write!(f, "HTTP error: {}", code),
            WaqiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WaqiError::ApiStatus(msg) => write!(f, "API status error: {}", msg),
            WaqiError::MissingToken => write!(f, "No API token configured (set AQI_TOKEN)"),
        }
    }
}

impl std::error::Error for WaqiError {}
