use std::collections::BTreeMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    #[serde(rename = "niederschlag")]
    pub precipitation: Option<f64>,
    #[serde(rename = "wetter")]
    pub condition: &'static str,
    #[serde(rename = "wind_geschwindigkeit")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "wind_richtung")]
    pub wind_direction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    pub temp: Option<f64>,
    #[serde(rename = "niederschlag")]
    pub precipitation: Option<f64>,
    #[serde(rename = "wetter")]
    pub condition: &'static str,
    #[serde(rename = "wind_geschwindigkeit")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "wind_richtung")]
    pub wind_direction: Option<f64>,
    #[serde(rename = "luftdruck")]
    pub pressure: Option<f64>,
    #[serde(rename = "luftfeuchte")]
    pub humidity: Option<f64>,
    #[serde(rename = "gefuehlte_temp")]
    pub perceived_temp: Option<f64>,
}

/// Forecast records keyed by the provider's ISO timestamps.
/// Keys sort chronologically since they share one format.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanedForecast {
    pub hourly: BTreeMap<String, HourlyRecord>,
    pub daily: BTreeMap<String, DailyRecord>,
}
