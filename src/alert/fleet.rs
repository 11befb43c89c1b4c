//! Fleet-wide risk banner.
//!
//! Scans every visible station, finds the worst valid index, and decides
//! whether the page needs an alert banner. The banner has its own severity
//! scale; it happens to escalate at the same 150/200 points as the
//! per-station tiers, but the two mappings are kept separate.

use std::fmt;

use crate::model::StationReading;

/// Banner escalates to `High` strictly above this index.
pub const HIGH_ALERT_ABOVE: u32 = 150;

/// Banner escalates to `Critical` strictly above this index.
pub const CRITICAL_ALERT_ABOVE: u32 = 200;

/// Banner severity, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FleetAlert {
    High,
    Critical,
}

impl FleetAlert {
    pub const ALL: [FleetAlert; 2] = [FleetAlert::High, FleetAlert::Critical];

    /// Banner container classes.
    pub fn style(self) -> &'static str {
        match self {
            FleetAlert::High => "bg-orange-500 text-white border-orange-400",
            FleetAlert::Critical => "bg-red-600 text-white border-red-500 animate-pulse",
        }
    }

    /// Maps a fleet maximum to a banner severity, or `None` below the
    /// `High` threshold.
    pub fn for_max(max_index: u32) -> Option<FleetAlert> {
        if max_index > CRITICAL_ALERT_ABOVE {
            Some(FleetAlert::Critical)
        } else if max_index > HIGH_ALERT_ABOVE {
            Some(FleetAlert::High)
        } else {
            None
        }
    }
}

impl fmt::Display for FleetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetAlert::High => f.write_str("high"),
            FleetAlert::Critical => f.write_str("critical"),
        }
    }
}

/// Largest valid index in the snapshot, starting from 0.
///
/// Readings whose index does not parse are skipped; they neither count as
/// zero nor stop the fold.
pub fn max_index(readings: &[StationReading]) -> u32 {
    readings
        .iter()
        .filter_map(StationReading::parsed_index)
        .fold(0, u32::max)
}

/// Banner severity for the current snapshot. An empty snapshot, or one
/// where nothing parses, yields `None`.
pub fn aggregate(readings: &[StationReading]) -> Option<FleetAlert> {
    FleetAlert::for_max(max_index(readings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, StationId};

    fn reading(uid: u64, index: &str) -> StationReading {
        StationReading {
            id: StationId::Numeric(uid),
            position: Position::new(13.7563, 100.5018),
            index: index.to_string(),
            label: format!("Station {}", uid),
            observed_at: "2024-05-01T12:00:00+07:00".to_string(),
        }
    }

    fn snapshot(indices: &[&str]) -> Vec<StationReading> {
        indices
            .iter()
            .enumerate()
            .map(|(i, idx)| reading(i as u64, idx))
            .collect()
    }

    #[test]
    fn test_empty_snapshot_has_no_alert() {
        assert_eq!(max_index(&[]), 0);
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn test_hazardous_station_raises_critical() {
        assert_eq!(aggregate(&snapshot(&["210", "40"])), Some(FleetAlert::Critical));
    }

    #[test]
    fn test_sentinel_is_skipped_not_zeroed() {
        let readings = snapshot(&["180", "-"]);
        assert_eq!(max_index(&readings), 180);
        assert_eq!(aggregate(&readings), Some(FleetAlert::High));
    }

    #[test]
    fn test_all_sentinels_yield_no_alert() {
        assert_eq!(aggregate(&snapshot(&["-", "-"])), None);
    }

    #[test]
    fn test_banner_boundaries() {
        assert_eq!(FleetAlert::for_max(0), None);
        assert_eq!(FleetAlert::for_max(150), None);
        assert_eq!(FleetAlert::for_max(151), Some(FleetAlert::High));
        assert_eq!(FleetAlert::for_max(200), Some(FleetAlert::High));
        assert_eq!(FleetAlert::for_max(201), Some(FleetAlert::Critical));
    }

    #[test]
    fn test_order_of_readings_does_not_matter() {
        let a = snapshot(&["12", "-", "199", "7"]);
        let mut b = a.clone();
        b.reverse();
        assert_eq!(aggregate(&a), aggregate(&b));
    }

    #[test]
    fn test_aggregate_is_idempotent_and_leaves_input_untouched() {
        let readings = snapshot(&["95", "abc", "205"]);
        let before = readings.clone();
        let first = aggregate(&readings);
        let second = aggregate(&readings);
        assert_eq!(first, second);
        assert_eq!(readings, before);
    }

    #[test]
    fn test_critical_is_more_severe_than_high() {
        assert!(FleetAlert::Critical > FleetAlert::High);
    }
}
