//! Static English and Thai string tables.
//!
//! Every user-facing string lives here. Tier and banner lookups are
//! exhaustive `match`es, so a missing entry is a compile error rather than
//! a runtime fallback.

use std::fmt;
use std::str::FromStr;

use crate::alert::{FleetAlert, RiskTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    En,
    #[default]
    Th,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Th];

    /// The other language; the dashboard toggle flips between the two.
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Th,
            Language::Th => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "th" => Ok(Language::Th),
            other => Err(format!("unsupported language '{}' (expected 'en' or 'th')", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

pub struct MapStrings {
    pub pm25: &'static str,
    pub flood: &'static str,
    pub locate_me: &'static str,
    pub station_label: &'static str,
    pub you_are_here: &'static str,
}

pub struct StatusStrings {
    pub good: &'static str,
    pub moderate: &'static str,
    pub sensitive: &'static str,
    pub unhealthy: &'static str,
    pub hazardous: &'static str,
    pub loading: &'static str,
}

pub struct WeatherStrings {
    pub temp: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub pressure: &'static str,
    pub conditions: &'static str,
    pub pollutants: &'static str,
}

pub struct InsightStrings {
    pub ai_analysis: &'static str,
    pub suggestion: &'static str,
}

pub struct ForecastStrings {
    pub title: &'static str,
    pub today: &'static str,
    pub avg: &'static str,
}

/// All UI strings for one language.
pub struct Dictionary {
    pub map: MapStrings,
    pub status: StatusStrings,
    pub weather: WeatherStrings,
    pub insight: InsightStrings,
    pub forecast: ForecastStrings,
}

static EN: Dictionary = Dictionary {
    map: MapStrings {
        pm25: "PM 2.5",
        flood: "Flood Risk",
        locate_me: "Where am I?",
        station_label: "THAILAND AIR VIBES",
        you_are_here: "You are here",
    },
    status: StatusStrings {
        good: "Fresh & Clean 🍃",
        moderate: "It's Okay 😐",
        sensitive: "Sensitive Groups 😷",
        unhealthy: "Bad Air Day 🚨",
        hazardous: "Toxic! Stay Home ☠️",
        loading: "Tuning signal... 📡",
    },
    weather: WeatherStrings {
        temp: "Temp",
        humidity: "Humidity",
        wind: "Wind Flow",
        pressure: "Pressure",
        conditions: "Conditions",
        pollutants: "Nasties in Air",
    },
    insight: InsightStrings {
        ai_analysis: "AI Insight 🤖",
        suggestion: "What to do?",
    },
    forecast: ForecastStrings {
        title: "5-DAY FORECAST (PM 2.5)",
        today: "Today",
        avg: "Avg",
    },
};

static TH: Dictionary = Dictionary {
    map: MapStrings {
        pm25: "ค่าฝุ่นวันนี้",
        flood: "จุดเสี่ยงน้ำ",
        locate_me: "ฉันอยู่ตรงไหน?",
        station_label: "ส่องอากาศเมืองไทย",
        you_are_here: "ตัวอยู่ตรงนี้",
    },
    status: StatusStrings {
        good: "ดีต่อปอดเว่อร์ 🍃",
        moderate: "ก็พอไหวอยู่ 😐",
        sensitive: "กลุ่มเสี่ยงระวังนะ 😷",
        unhealthy: "ไม่ไหวบอกไหว 🚨",
        hazardous: "อันตราย! เข้าบ้านด่วน ☠️",
        loading: "กำลังจูนสัญญาณ... 📡",
    },
    weather: WeatherStrings {
        temp: "อุณหภูมิ",
        humidity: "ความชื้น",
        wind: "แรงลม",
        pressure: "ความกดอากาศ",
        conditions: "สภาพรวมๆ",
        pollutants: "ตัวร้ายในอากาศ",
    },
    insight: InsightStrings {
        ai_analysis: "AI อยากบอก 🤖",
        suggestion: "ทำตัวยังไงดี?",
    },
    forecast: ForecastStrings {
        title: "แนวโน้มฝุ่น 5 วัน",
        today: "วันนี้",
        avg: "เฉลี่ย",
    },
};

pub fn dictionary(lang: Language) -> &'static Dictionary {
    match lang {
        Language::En => &EN,
        Language::Th => &TH,
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Something with a precomposed string per language.
pub trait Localize {
    fn localize(&self, lang: Language) -> &'static str;
}

impl Localize for RiskTier {
    fn localize(&self, lang: Language) -> &'static str {
        let status = &dictionary(lang).status;
        match self {
            RiskTier::Good => status.good,
            RiskTier::Moderate => status.moderate,
            RiskTier::SensitiveGroups => status.sensitive,
            RiskTier::Unhealthy => status.unhealthy,
            RiskTier::Hazardous => status.hazardous,
        }
    }
}

impl Localize for FleetAlert {
    fn localize(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (FleetAlert::Critical, Language::Th) => {
                "วิกฤต! หลายพื้นที่ค่าฝุ่นพุ่งสูงระดับอันตราย งดกิจกรรมกลางแจ้งทันที"
            }
            (FleetAlert::Critical, Language::En) => {
                "CRITICAL WARNING: Hazardous air quality detected in multiple areas!"
            }
            (FleetAlert::High, Language::Th) => "เตือนภัย: อากาศเริ่มแย่ในหลายพื้นที่ ดูแลตัวเองด้วยนะ",
            (FleetAlert::High, Language::En) => "WARNING: Unhealthy air quality levels detected.",
        }
    }
}

/// Localized label for a tier or banner message for an alert.
pub fn resolve<T: Localize + ?Sized>(item: &T, lang: Language) -> &'static str {
    item.localize(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_resolves_in_every_language() {
        for tier in RiskTier::ALL {
            for lang in Language::ALL {
                assert!(
                    !resolve(&tier, lang).trim().is_empty(),
                    "missing label for {:?} in {}",
                    tier,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_every_alert_resolves_in_every_language() {
        for alert in FleetAlert::ALL {
            for lang in Language::ALL {
                assert!(
                    !resolve(&alert, lang).trim().is_empty(),
                    "missing banner for {:?} in {}",
                    alert,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_tier_labels_are_distinct_within_a_language() {
        for lang in Language::ALL {
            let labels: std::collections::HashSet<_> =
                RiskTier::ALL.iter().map(|t| resolve(t, lang)).collect();
            assert_eq!(labels.len(), RiskTier::ALL.len(), "duplicate label in {}", lang);
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            resolve(&RiskTier::Good, Language::En),
            resolve(&RiskTier::Good, Language::Th)
        );
        assert_eq!(resolve(&FleetAlert::High, Language::En), "WARNING: Unhealthy air quality levels detected.");
    }

    #[test]
    fn test_language_parse_and_toggle() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(" th ".parse::<Language>(), Ok(Language::Th));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Th);
        assert_eq!(Language::Th.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_dictionary_chrome_strings_present() {
        for lang in Language::ALL {
            let d = dictionary(lang);
            for s in [
                d.map.pm25,
                d.map.flood,
                d.map.locate_me,
                d.map.station_label,
                d.map.you_are_here,
                d.status.loading,
                d.weather.temp,
                d.weather.humidity,
                d.weather.wind,
                d.weather.pressure,
                d.weather.conditions,
                d.weather.pollutants,
                d.insight.ai_analysis,
                d.insight.suggestion,
                d.forecast.title,
                d.forecast.today,
                d.forecast.avg,
            ] {
                assert!(!s.is_empty(), "empty chrome string in {}", lang);
            }
        }
    }
}
