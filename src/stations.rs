/// Station snapshot helpers for the map view.
///
/// Defines the monitored region and turns a fetched snapshot of
/// `StationReading`s into map markers. Readings with no usable index or an
/// impossible position are left off the map; they still exist in the
/// snapshot and are handled by the fleet aggregator on their own terms.

use crate::alert::{classify, RiskTier};
use crate::i18n::{resolve, Language};
use crate::logging::{self, DataSource};
use crate::model::{Position, StationId, StationReading};

// ---------------------------------------------------------------------------
// Monitored region
// ---------------------------------------------------------------------------

/// Latitude/longitude rectangle, as the WAQI bounds query expects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// `"south,west,north,east"`, the `latlng` query parameter format.
    pub fn to_latlng_param(&self) -> String {
        format!("{},{},{},{}", self.south, self.west, self.north, self.east)
    }

    /// Parses `"south,west,north,east"`. Returns `None` unless there are
    /// exactly four numbers forming a valid, non-inverted box.
    pub fn parse(s: &str) -> Option<BoundingBox> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        let &[south, west, north, east] = parts.as_slice() else {
            return None;
        };
        let bbox = BoundingBox { south, west, north, east };
        let corners_valid =
            Position::new(south, west).is_valid() && Position::new(north, east).is_valid();
        (corners_valid && south <= north && west <= east).then_some(bbox)
    }
}

/// Mainland Thailand and its neighbouring border stations.
pub const THAILAND_BOUNDS: BoundingBox = BoundingBox {
    south: 5.61,
    west: 97.34,
    north: 20.46,
    east: 105.63,
};

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// One drawable station marker.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub id: StationId,
    pub position: Position,
    /// Index text exactly as shown on the marker pill.
    pub index_text: String,
    pub index: u32,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub station_label: String,
}

/// Builds markers for every reading with a valid index and position,
/// preserving snapshot order.
pub fn markers(readings: &[StationReading], lang: Language) -> Vec<StationMarker> {
    readings
        .iter()
        .filter_map(|reading| marker(reading, lang))
        .collect()
}

fn marker(reading: &StationReading, lang: Language) -> Option<StationMarker> {
    let id = reading.id.to_string();
    let Some(index) = reading.parsed_index() else {
        logging::debug(
            DataSource::Waqi,
            Some(&id),
            &format!("no usable index ('{}'), marker skipped", reading.index),
        );
        return None;
    };
    if !reading.position.is_valid() {
        logging::warn(
            DataSource::Waqi,
            Some(&id),
            &format!(
                "position out of range ({}, {}), marker skipped",
                reading.position.latitude, reading.position.longitude
            ),
        );
        return None;
    }
    let tier = classify(index);
    Some(StationMarker {
        id: reading.id.clone(),
        position: reading.position,
        index_text: reading.index.trim().to_string(),
        index,
        tier,
        tier_label: resolve(&tier, lang),
        station_label: reading.label.clone(),
    })
}

/// Looks up a reading by station id. Returns `None` if not in the snapshot.
pub fn find_station<'a>(readings: &'a [StationReading], id: &StationId) -> Option<&'a StationReading> {
    readings.iter().find(|r| &r.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
