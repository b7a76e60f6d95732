use std::{env, fs};
use std::time::Duration;
use chrono_tz::Tz;
use log::info;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Geocoding {
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Geocoding {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug)]
pub struct Forecast {
    #[serde(default = "default_forecast_url")]
    pub base_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Forecast {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed reference timezone
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError(format!("invalid timezone '{}': {}", self.timezone, e)))
    }
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_to_stdout")]
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub web_server: WebServer,
    pub geocoding: Geocoding,
    pub forecast: Forecast,
    pub general: General,
}

fn default_geocoding_url() -> String { "https://nominatim.openstreetmap.org/search".to_string() }
fn default_user_agent() -> String { "weatherforecast".to_string() }
fn default_forecast_url() -> String { "https://api.open-meteo.com/v1/dwd-icon".to_string() }
fn default_timezone() -> String { "Europe/Berlin".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_to_stdout() -> bool { true }

/// Loads the configuration and sets up logging.
///
/// The config file path is taken from the first program argument, `config.toml` if absent.
pub fn config() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);

    let config = load_config(config_path)?;
    setup_logger(&config.general)?;

    info!("configuration loaded from {}", config_path);

    Ok(config)
}

/// Reads and validates a toml configuration file
///
/// # Arguments
///
/// * 'config_path' - path to the config file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    config.forecast.tz()?;
    if config.geocoding.user_agent.trim().is_empty() {
        return Err(ConfigError::from("geocoding.user_agent must not be empty"));
    }

    Ok(config)
}
