use clap::Parser;
use std::path::PathBuf;

use aira_service::config::DEFAULT_CONFIG_PATH;
use aira_service::i18n::Language;
use aira_service::model::StationId;

#[derive(Debug, Parser)]
#[command(name = "aira", version, about = "Thailand air quality risk monitor")]
pub struct CliArgs {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Display language: en or th. Overrides the config file.
    #[arg(long)]
    pub lang: Option<Language>,

    /// Also show the detail panel for this station uid
    #[arg(long, value_name = "UID")]
    pub station: Option<String>,

    /// Print the flood layer tile template
    #[arg(long)]
    pub flood: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn station_id(&self) -> Option<StationId> {
        self.station.as_deref().map(|s| match s.trim().parse::<u64>() {
            Ok(n) => StationId::Numeric(n),
            Err(_) => StationId::from(s.trim()),
        })
    }
}
