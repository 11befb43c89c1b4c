/// Layout for the 5-day PM2.5 forecast bar chart.
///
/// Heights are percentages of the tallest daily maximum so the chart scales
/// with the data. Bars never drop below a minimum height, otherwise low
/// readings disappear entirely.

use chrono::NaiveDate;

use crate::alert::{classify, RiskTier};
use crate::model::ForecastDay;

/// Number of days shown.
pub const FORECAST_DAYS: usize = 5;

/// Minimum bar height, in percent.
pub const MIN_BAR_PERCENT: f64 = 15.0;

/// Scale used when every daily maximum is 0.
pub const FALLBACK_SCALE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBar {
    pub label: String,
    pub avg: u32,
    pub height_percent: f64,
    pub tier: RiskTier,
    pub gradient: &'static str,
}

/// Lays out up to [`FORECAST_DAYS`] bars. Returns an empty vector when
/// there is no forecast; callers skip the chart in that case.
pub fn layout(days: &[ForecastDay], today_label: &str) -> Vec<ForecastBar> {
    let shown = &days[..days.len().min(FORECAST_DAYS)];

    let scale = match shown.iter().map(|d| d.max).max() {
        Some(0) | None => FALLBACK_SCALE,
        Some(m) => m,
    };

    shown
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let tier = classify(day.avg);
            let label = if i == 0 {
                today_label.to_string()
            } else {
                weekday_label(&day.day)
            };
            ForecastBar {
                label,
                avg: day.avg,
                height_percent: bar_height(day.avg, scale),
                tier,
                gradient: tier.bar_gradient(),
            }
        })
        .collect()
}

fn bar_height(avg: u32, scale: u32) -> f64 {
    (f64::from(avg) / f64::from(scale) * 100.0).max(MIN_BAR_PERCENT)
}

/// Short English weekday ("Mon") for a `YYYY-MM-DD` date, or the input
/// unchanged if it is not one.
fn weekday_label(day: &str) -> String {
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%a").to_string(),
        Err(_) => day.to_string(),
    }
}
