//! AIRA: air quality risk classification for Thai monitoring stations.
//!
//! The core is `alert` (per-station tiers and the fleet banner) and `i18n`
//! (labels and messages). The other modules shape WAQI data around it for
//! the map, the station panel and the forecast chart.

pub mod alert;
pub mod config;
pub mod forecast;
pub mod i18n;
pub mod ingest;
pub mod insight;
pub mod logging;
pub mod model;
pub mod panel;
pub mod stations;
