use serde::Serialize;
use crate::forecast_cleaner::models::CleanedForecast;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Serializes as an empty object
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoData {}

/// Uniform response shape, built fresh for every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(message: &str, data: T) -> Self {
        Envelope { status: Status::Success, message: message.to_string(), data }
    }
}

impl<T: Default> Envelope<T> {
    pub fn error(message: &str) -> Self {
        Envelope { status: Status::Error, message: message.to_string(), data: T::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastData {
    #[serde(flatten)]
    pub forecast: CleanedForecast,
    pub city: String,
    pub country: String,
    pub ai_text: String,
}

/// Payload of a forecast envelope: the forecast on success, `{}` otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForecastPayload {
    Forecast(ForecastData),
    Empty(NoData),
}

impl Default for ForecastPayload {
    fn default() -> Self {
        ForecastPayload::Empty(NoData {})
    }
}
