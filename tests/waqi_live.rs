/// Live WAQI API checks
///
/// These tests make real API calls and are marked #[ignore] so normal test
/// runs don't depend on external availability or a token.
///
/// Prerequisites:
/// - AQI_TOKEN set in the environment or .env
/// - Internet access to api.waqi.info
///
/// Run with: cargo test --test waqi_live -- --ignored

use aira_service::config::{Config, WaqiConfig};
use aira_service::ingest::waqi;
use aira_service::model::StationId;
use aira_service::panel::StationPanel;
use aira_service::i18n::Language;

fn live_config() -> WaqiConfig {
    let config = Config::load(std::path::Path::new("does-not-exist.toml"))
        .expect("defaults always load");
    assert!(
        config.waqi.token.is_some(),
        "AQI_TOKEN must be set to run live tests"
    );
    config.waqi
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_thailand_bounds_returns_stations() {
    let config = live_config();
    let client = waqi::build_client(&config).expect("client builds");
    let readings = waqi::fetch_stations(&client, &config).expect("bounds fetch should succeed");

    println!("\n🔍 {} stations in Thailand bounds", readings.len());
    assert!(!readings.is_empty(), "expected at least one station in Thailand");
    assert!(readings.iter().all(|r| r.position.is_valid()));
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_station_feed_builds_panel() {
    let config = live_config();
    let client = waqi::build_client(&config).expect("client builds");
    let readings = waqi::fetch_stations(&client, &config).expect("bounds fetch should succeed");
    let first = readings
        .iter()
        .find(|r| r.parsed_index().is_some())
        .expect("at least one station with data");

    let feed = waqi::fetch_station_feed(&client, &config, &first.id).expect("feed fetch");
    let panel = StationPanel::build(&feed, Language::En);
    println!("\n{} → {:?}", panel.station_name, panel.headline.map(|h| h.tier));
    assert!(!panel.station_name.is_empty());
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_bad_token_is_api_status_error() {
    let config = WaqiConfig {
        token: Some("definitely-not-a-token".to_string()),
        ..WaqiConfig::default()
    };
    let client = waqi::build_client(&config).expect("client builds");
    let err = waqi::fetch_station_feed(&client, &config, &StationId::Numeric(5775)).unwrap_err();
    assert!(matches!(err, aira_service::model::WaqiError::ApiStatus(_)), "got {:?}", err);
}
