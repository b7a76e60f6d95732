use serde::Deserialize;

/// Daily field names requested from Open-Meteo, in request order
pub const DAILY_FIELDS: [&str; 6] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "weathercode",
    "windspeed_10m_max",
    "winddirection_10m_dominant",
];

/// Hourly field names requested from Open-Meteo, in request order
pub const HOURLY_FIELDS: [&str; 7] = [
    "temperature_2m",
    "precipitation",
    "weathercode",
    "windspeed_10m",
    "winddirection_10m",
    "pressure_msl",
    "relativehumidity_2m",
];

/// Daily parallel arrays, all aligned with `time`.
/// Arrays missing from the document deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    #[serde(alias = "weather_code")]
    pub weathercode: Vec<Option<i64>>,
    #[serde(alias = "wind_speed_10m_max")]
    pub windspeed_10m_max: Vec<Option<f64>>,
    #[serde(alias = "wind_direction_10m_dominant")]
    pub winddirection_10m_dominant: Vec<Option<f64>>,
}

/// Hourly parallel arrays, all aligned with `time`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    #[serde(alias = "weather_code")]
    pub weathercode: Vec<Option<i64>>,
    #[serde(alias = "wind_speed_10m")]
    pub windspeed_10m: Vec<Option<f64>>,
    #[serde(alias = "wind_direction_10m")]
    pub winddirection_10m: Vec<Option<f64>>,
    pub pressure_msl: Vec<Option<f64>>,
    #[serde(alias = "relative_humidity_2m")]
    pub relativehumidity_2m: Vec<Option<f64>>,
}

/// The uncleaned forecast document as returned by Open-Meteo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub daily: DailySeries,
    #[serde(default)]
    pub hourly: HourlySeries,
}
