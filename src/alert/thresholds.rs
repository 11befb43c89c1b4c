//! Per-station AQI classification.
//!
//! One shared threshold table drives marker colour, panel headline and
//! forecast bar colour, so the surfaces can never disagree about where a
//! boundary falls. The fleet banner uses its own mapping in `alert::fleet`.

use std::fmt;

/// Risk tiers, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskTier {
    Good,
    Moderate,
    SensitiveGroups,
    Unhealthy,
    Hazardous,
}

/// Inclusive upper bound of each tier below `Hazardous`, ascending.
pub const TIER_UPPER_BOUNDS: [(u32, RiskTier); 4] = [
    (50, RiskTier::Good),
    (100, RiskTier::Moderate),
    (150, RiskTier::SensitiveGroups),
    (200, RiskTier::Unhealthy),
];

impl RiskTier {
    /// Every tier, least to most severe.
    pub const ALL: [RiskTier; 5] = [
        RiskTier::Good,
        RiskTier::Moderate,
        RiskTier::SensitiveGroups,
        RiskTier::Unhealthy,
        RiskTier::Hazardous,
    ];

    /// Marker background colour token.
    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Good => "bg-emerald-400",
            RiskTier::Moderate => "bg-yellow-300",
            RiskTier::SensitiveGroups => "bg-orange-400",
            RiskTier::Unhealthy => "bg-rose-500",
            RiskTier::Hazardous => "bg-purple-500",
        }
    }

    /// Marker text colour token, chosen for contrast against [`RiskTier::color`].
    pub fn text_contrast(self) -> &'static str {
        match self {
            RiskTier::Good => "text-emerald-900",
            RiskTier::Moderate => "text-yellow-900",
            RiskTier::SensitiveGroups => "text-orange-900",
            RiskTier::Unhealthy | RiskTier::Hazardous => "text-white",
        }
    }

    /// Classes for the large index card at the top of the station panel.
    pub fn headline_classes(self) -> &'static str {
        match self {
            RiskTier::Good => "bg-emerald-500 text-white",
            RiskTier::Moderate => "bg-yellow-400 text-yellow-900",
            RiskTier::SensitiveGroups => "bg-orange-500 text-white",
            RiskTier::Unhealthy => "bg-rose-500 text-white",
            RiskTier::Hazardous => "bg-purple-600 text-white",
        }
    }

    /// Vertical gradient for a forecast bar at this tier.
    pub fn bar_gradient(self) -> &'static str {
        match self {
            RiskTier::Good => "bg-gradient-to-t from-teal-500 to-emerald-400 shadow-emerald-200/50",
            RiskTier::Moderate => "bg-gradient-to-t from-yellow-500 to-amber-400 shadow-amber-200/50",
            RiskTier::SensitiveGroups => {
                "bg-gradient-to-t from-orange-600 to-orange-400 shadow-orange-200/50"
            }
            RiskTier::Unhealthy => "bg-gradient-to-t from-red-600 to-rose-500 shadow-rose-200/50",
            RiskTier::Hazardous => {
                "bg-gradient-to-t from-purple-700 to-fuchsia-600 shadow-fuchsia-200/50"
            }
        }
    }

    /// Dictionary key of the tier's status label.
    pub fn label_key(self) -> &'static str {
        match self {
            RiskTier::Good => "good",
            RiskTier::Moderate => "moderate",
            RiskTier::SensitiveGroups => "sensitive",
            RiskTier::Unhealthy => "unhealthy",
            RiskTier::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}

/// Maps a validated index to its risk tier. First matching upper bound wins;
/// anything above the last bound is `Hazardous`.
///
/// Callers parse the raw index first (see `model::parse_index`); missing
/// data never reaches this function.
pub fn classify(index: u32) -> RiskTier {
    TIER_UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| index <= *upper)
        .map(|(_, tier)| *tier)
        .unwrap_or(RiskTier::Hazardous)
}
