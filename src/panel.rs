/// Station detail panel view model.
///
/// Shapes a `StationFeed` into everything the side panel shows: headline
/// tier, insight card, weather cards, pollutant rows and the forecast bars.
/// Missing weather values render as `--` and missing pollutants are left
/// out; a feed without a valid index has no headline or insight.

use crate::alert::{classify, RiskTier};
use crate::forecast::{self, ForecastBar};
use crate::i18n::{dictionary, resolve, Language};
use crate::insight::{self, Insight};
use crate::model::{IaqiValue, StationFeed};

/// Placeholder for a reading the station does not report.
pub const MISSING: &str = "--";

pub const ATTRIBUTION: &str = "Source: World Air Quality Index Project (waqi.info)";

pub const UPDATED_LABEL: &str = "Updated:";

/// Shown in place of the panel when the station feed could not be loaded.
pub const NO_DETAIL: &str = "No detailed data available for this station.";

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub index: u32,
    pub tier: RiskTier,
    pub label: &'static str,
    pub classes: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollutantRow {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationPanel {
    pub station_name: String,
    pub updated_at: String,
    pub headline: Option<Headline>,
    pub insight: Option<Insight>,
    pub weather: Vec<WeatherCard>,
    pub pollutants: Vec<PollutantRow>,
    pub forecast: Vec<ForecastBar>,
    pub attribution: &'static str,
}

impl StationPanel {
    pub fn build(feed: &StationFeed, lang: Language) -> StationPanel {
        let dict = dictionary(lang);

        let headline = feed.aqi.map(|index| {
            let tier = classify(index);
            Headline {
                index,
                tier,
                label: resolve(&tier, lang),
                classes: tier.headline_classes(),
            }
        });
        let insight = headline.as_ref().map(|h| insight::compose(h.tier, lang));

        let iaqi = &feed.iaqi;
        let weather = vec![
            WeatherCard {
                label: dict.weather.temp,
                value: with_suffix(iaqi.t, "°C"),
            },
            WeatherCard {
                label: dict.weather.humidity,
                value: with_suffix(iaqi.h, "%"),
            },
            WeatherCard {
                label: dict.weather.wind,
                value: with_suffix(iaqi.w, " m/s"),
            },
            WeatherCard {
                label: dict.weather.pressure,
                value: with_suffix(iaqi.p, " hPa"),
            },
        ];

        let pollutants = [
            ("PM 2.5", iaqi.pm25, "µg/m³"),
            ("PM 10", iaqi.pm10, "µg/m³"),
            ("Ozone (O3)", iaqi.o3, "ppb"),
            ("Nitrogen Dioxide (NO2)", iaqi.no2, "ppb"),
            ("Sulfur Dioxide (SO2)", iaqi.so2, "ppb"),
        ]
        .into_iter()
        .filter_map(|(label, value, unit)| {
            value.map(|v| PollutantRow {
                label,
                value: v.v.to_string(),
                unit,
            })
        })
        .collect();

        StationPanel {
            station_name: feed.city.name.clone(),
            updated_at: feed.time.s.clone(),
            headline,
            insight,
            weather,
            pollutants,
            forecast: forecast::layout(&feed.forecast.daily.pm25, dict.forecast.today),
            attribution: ATTRIBUTION,
        }
    }
}

fn format_value(value: Option<IaqiValue>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.v.to_string())
}

fn with_suffix(value: Option<IaqiValue>, suffix: &str) -> String {
    format!("{}{}", format_value(value), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_FEED: &str = r#"{
        "aqi": 162,
        "idx": 5775,
        "city": {"name": "Bang Na, Bangkok", "url": "https://aqicn.org/city/thailand/bangkok/bang-na"},
        "dominentpol": "pm25",
        "iaqi": {
            "h": {"v": 74},
            "no2": {"v": 9.2},
            "o3": {"v": 15.3},
            "p": {"v": 1009},
            "pm10": {"v": 68},
            "pm25": {"v": 162},
            "so2": {"v": 1.6},
            "t": {"v": 31.5},
            "w": {"v": 2.1}
        },
        "forecast": {"daily": {"pm25": [
            {"avg": 158, "day": "2024-02-01", "max": 170, "min": 140},
            {"avg": 120, "day": "2024-02-02", "max": 150, "min": 95}
        ]}},
        "time": {"s": "2024-02-01 14:00:00", "tz": "+07:00", "v": 1706796000}
    }"#;

    fn full_feed() -> StationFeed {
        serde_json::from_str(FULL_FEED).expect("fixture should parse")
    }

    #[test]
    fn test_headline_uses_shared_classifier() {
        let panel = StationPanel::build(&full_feed(), Language::En);
        let headline = panel.headline.expect("feed has a valid index");
        assert_eq!(headline.index, 162);
        assert_eq!(headline.tier, RiskTier::Unhealthy);
        assert_eq!(headline.label, "Bad Air Day 🚨");
        assert_eq!(headline.classes, "bg-rose-500 text-white");
    }

    #[test]
    fn test_insight_matches_headline() {
        let panel = StationPanel::build(&full_feed(), Language::Th);
        let insight = panel.insight.expect("insight present with headline");
        assert_eq!(insight.title, "สัญญาณอันตราย! สีแดงเดือด 🔥");
    }

    #[test]
    fn test_weather_cards_formatted_with_units() {
        let panel = StationPanel::build(&full_feed(), Language::En);
        let values: Vec<_> = panel.weather.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["31.5°C", "74%", "2.1 m/s", "1009 hPa"]);
        assert_eq!(panel.weather[0].label, "Temp");
    }

    #[test]
    fn test_pollutant_rows_in_fixed_order() {
        let panel = StationPanel::build(&full_feed(), Language::En);
        let labels: Vec<_> = panel.pollutants.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["PM 2.5", "PM 10", "Ozone (O3)", "Nitrogen Dioxide (NO2)", "Sulfur Dioxide (SO2)"]
        );
        assert_eq!(panel.pollutants[0].value, "162");
        assert_eq!(panel.pollutants[0].unit, "µg/m³");
        assert_eq!(panel.pollutants[4].value, "1.6");
    }

    #[test]
    fn test_forecast_first_bar_is_localized_today() {
        let panel = StationPanel::build(&full_feed(), Language::Th);
        assert_eq!(panel.forecast.len(), 2);
        assert_eq!(panel.forecast[0].label, "วันนี้");
    }

    #[test]
    fn test_sparse_feed_shows_placeholders_and_no_pollutants() {
        let json = r#"{"aqi": "-", "idx": 42, "city": {"name": "Quiet Station"}}"#;
        let feed: StationFeed = serde_json::from_str(json).expect("sparse feed should parse");
        let panel = StationPanel::build(&feed, Language::En);
        assert!(panel.headline.is_none());
        assert!(panel.insight.is_none());
        assert!(panel.forecast.is_empty());
        assert_eq!(panel.weather[0].value, "--°C");
        assert!(panel.pollutants.is_empty());
        assert_eq!(panel.attribution, ATTRIBUTION);
    }

    #[test]
    fn test_missing_pollutants_are_skipped() {
        let json = r#"{"aqi": 40, "idx": 7, "city": {"name": "Lampang"}, "iaqi": {"pm25": {"v": 40}, "so2": {"v": 2}}}"#;
        let feed: StationFeed = serde_json::from_str(json).expect("feed should parse");
        let panel = StationPanel::build(&feed, Language::En);
        let rows: Vec<_> = panel.pollutants.iter().map(|r| (r.label, r.value.as_str())).collect();
        assert_eq!(rows, [("PM 2.5", "40"), ("Sulfur Dioxide (SO2)", "2")]);
        assert_eq!(panel.weather.len(), 4);
    }
}
