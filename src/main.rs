use clap::Parser;
use std::error::Error;

use aira_service::alert;
use aira_service::config::Config;
use aira_service::i18n::{dictionary, resolve, Language};
use aira_service::ingest::{gistda, waqi};
use aira_service::logging::{self, DataSource, LogLevel};
use aira_service::model::{StationFeed, StationId, WaqiError};
use aira_service::panel::{self, StationPanel};
use aira_service::stations::{self, StationMarker};

mod cli;

use cli::CliArgs;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        logging::error(DataSource::System, None, &e.to_string());
        eprintln!("aira: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load(&args.config)?;
    if let Some(lang) = args.lang {
        config.language = lang.code().to_string();
    }
    let lang = config.language();

    let level = if args.debug { LogLevel::Debug } else { config.log_level()? };
    logging::init_logger(level, config.log.file.as_deref(), config.log.timestamps);
    logging::debug(
        DataSource::Config,
        None,
        &format!("config from {}, language {}", args.config.display(), lang),
    );

    let client = waqi::build_client(&config.waqi)?;
    let readings = waqi::fetch_stations(&client, &config.waqi).map_err(|e| {
        logging::log_waqi_failure(None, "map bounds fetch", &e);
        e
    })?;
    let usable = readings.iter().filter(|r| r.parsed_index().is_some()).count();
    logging::log_fetch_summary(DataSource::Waqi, readings.len(), usable);

    let dict = dictionary(lang);
    println!("AIRA Monitor · {}", dict.map.station_label);
    println!();

    if let Some(banner) = alert::aggregate(&readings) {
        println!("!! [{}] {}", banner, resolve(&banner, lang));
        println!();
    }

    let markers = stations::markers(&readings, lang);
    print_markers(&markers);

    if let Some(uid) = args.station_id() {
        let feed = waqi::fetch_station_feed(&client, &config.waqi, &uid);
        for line in render_station(&uid, feed, lang) {
            println!("{}", line);
        }
    }

    if args.flood {
        println!();
        match gistda::flood_tile_template(&config.flood) {
            Some(template) => println!("{}: {}", dict.map.flood, template),
            None => println!("{}: unavailable", dict.map.flood),
        }
    }

    Ok(())
}

fn print_markers(markers: &[StationMarker]) {
    for m in markers {
        println!(
            "{:>5}  {:>4}  {:<28} {}",
            m.id.to_string(),
            m.index_text,
            m.tier_label,
            m.station_label
        );
    }
}

/// Detail panel lines for one station. A failed fetch is logged and
/// degrades to the empty-state message; it never aborts the run.
fn render_station(uid: &StationId, feed: Result<StationFeed, WaqiError>, lang: Language) -> Vec<String> {
    let mut out = vec![String::new()];
    let feed = match feed {
        Ok(feed) => feed,
        Err(e) => {
            logging::log_waqi_failure(Some(&uid.to_string()), "station feed fetch", &e);
            out.push(panel::NO_DETAIL.to_string());
            return out;
        }
    };
    let detail = StationPanel::build(&feed, lang);
    let dict = dictionary(lang);

    out.push(format!("── {} ──", detail.station_name));
    if !detail.updated_at.is_empty() {
        out.push(format!("{} {}", panel::UPDATED_LABEL, detail.updated_at));
    }

    match (&detail.headline, &detail.insight) {
        (Some(headline), Some(insight)) => {
            out.push(format!("{}  {}", headline.index, headline.label));
            out.push(String::new());
            out.push(format!("{}: {}", dict.insight.ai_analysis, insight.title));
            out.push(format!("  {}", insight.description));
            out.push(format!("  💡 {}: {}", dict.insight.suggestion, insight.recommendation));
        }
        _ => out.push(panel::MISSING.to_string()),
    }

    out.push(String::new());
    out.push(dict.weather.conditions.to_string());
    for card in &detail.weather {
        out.push(format!("  {:<14} {}", card.label, card.value));
    }

    if !detail.pollutants.is_empty() {
        out.push(String::new());
        out.push(dict.weather.pollutants.to_string());
        for row in &detail.pollutants {
            out.push(format!("  {:<24} {:>6} {}", row.label, row.value, row.unit));
        }
    }

    if !detail.forecast.is_empty() {
        out.push(String::new());
        out.push(dict.forecast.title.to_string());
        for bar in &detail.forecast {
            let width = (bar.height_percent / 5.0).round() as usize;
            out.push(format!(
                "  {:<8} {:<20} {}: {}",
                bar.label,
                "█".repeat(width),
                dict.forecast.avg,
                bar.avg
            ));
        }
    }

    out.push(String::new());
    out.push(detail.attribution.to_string());
    out
}
