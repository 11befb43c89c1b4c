/// Risk classification and escalation.
///
/// Submodules:
/// - `thresholds`: maps one station's index to a `RiskTier`.
/// - `fleet`: maps the worst index across all stations to a banner.

pub mod fleet;
pub mod thresholds;

pub use fleet::{aggregate, max_index, FleetAlert};
pub use thresholds::{classify, RiskTier};
