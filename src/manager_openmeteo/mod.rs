pub mod errors;
pub mod models;

use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::Coordinates;
use crate::manager_forecast::ForecastProvider;
use crate::manager_openmeteo::errors::OpenMeteoError;
use crate::manager_openmeteo::models::{RawForecast, DAILY_FIELDS, HOURLY_FIELDS};

/// Struct for fetching weather forecasts from Open-Meteo (DWD ICON model)
pub struct OpenMeteo {
    client: Client,
    base_url: String,
    timezone: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'base_url' - full url of the forecast endpoint, e.g. https://api.open-meteo.com/v1/dwd-icon
    /// * 'timezone' - IANA timezone the provider should align timestamps to
    /// * 'timeout' - request timeout
    pub fn new(base_url: &str, timezone: &str, timeout: Duration) -> Result<OpenMeteo, OpenMeteoError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timezone: timezone.to_string(),
        })
    }

    /// Retrieves the raw daily and hourly forecast for the given position.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn new_forecast(&self, lat: f64, long: f64) -> Result<RawForecast, OpenMeteoError> {
        let daily = DAILY_FIELDS.join(",");
        let hourly = HOURLY_FIELDS.join(",");
        let latitude = format!("{:0.4}", lat);
        let longitude = format!("{:0.4}", long);

        debug!("requesting forecast for {}/{}", latitude, longitude);

        let req = self.client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("timezone", self.timezone.as_str()),
                ("daily", daily.as_str()),
                ("hourly", hourly.as_str()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OpenMeteoError::OpenMeteo(format!("Error while fetching forecast from Open-Meteo: {}", status)));
        }

        let json = req.text().await?;
        let forecast: RawForecast = serde_json::from_str(&json)?;

        Ok(forecast)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteo {
    async fn fetch(&self, coordinates: Coordinates) -> Result<RawForecast, ForecastError> {
        Ok(self.new_forecast(coordinates.latitude, coordinates.longitude).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenMeteo {
        OpenMeteo::new(&format!("{}/v1/dwd-icon", server.uri()), "Europe/Berlin", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetches_and_decodes_forecast() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/dwd-icon"))
            .and(query_param("latitude", "52.5200"))
            .and(query_param("longitude", "13.4050"))
            .and(query_param("timezone", "Europe/Berlin"))
            .and(query_param("hourly", HOURLY_FIELDS.join(",")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 52.52,
                "longitude": 13.4,
                "daily": {
                    "time": ["2026-10-19", "2026-10-20"],
                    "temperature_2m_max": [14.2, 12.0],
                    "temperature_2m_min": [6.1, null],
                    "precipitation_sum": [0.0, 2.4],
                    "weathercode": [3, 61],
                    "windspeed_10m_max": [18.0, 25.3],
                    "winddirection_10m_dominant": [240, 260]
                },
                "hourly": {
                    "time": ["2026-10-19T00:00", "2026-10-19T01:00"],
                    "temperature_2m": [8.0, 7.6],
                    "precipitation": [0.0, 0.1],
                    "weathercode": [2, 51],
                    "windspeed_10m": [9.4, 10.1],
                    "winddirection_10m": [230, 235],
                    "pressure_msl": [1012.3, 1012.0],
                    "relativehumidity_2m": [81, 84]
                }
            })))
            .mount(&server)
            .await;

        let forecast = provider(&server).new_forecast(52.52, 13.405).await.unwrap();

        assert_eq!(forecast.daily.time, vec!["2026-10-19", "2026-10-20"]);
        assert_eq!(forecast.daily.temperature_2m_min, vec![Some(6.1), None]);
        assert_eq!(forecast.daily.weathercode, vec![Some(3), Some(61)]);
        assert_eq!(forecast.hourly.time.len(), 2);
        assert_eq!(forecast.hourly.relativehumidity_2m, vec![Some(81.0), Some(84.0)]);
    }

    #[tokio::test]
    async fn accepts_current_field_names() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/dwd-icon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": {
                    "time": ["2026-10-19T00:00"],
                    "weather_code": [45],
                    "relative_humidity_2m": [90]
                }
            })))
            .mount(&server)
            .await;

        let forecast = provider(&server).new_forecast(1.0, 2.0).await.unwrap();

        assert_eq!(forecast.hourly.weathercode, vec![Some(45)]);
        assert_eq!(forecast.hourly.relativehumidity_2m, vec![Some(90.0)]);
        assert!(forecast.daily.time.is_empty());
    }

    #[tokio::test]
    async fn http_failure_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = provider(&server).new_forecast(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, OpenMeteoError::OpenMeteo(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn malformed_document_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider(&server).new_forecast(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, OpenMeteoError::Document(_)));
    }

    #[tokio::test]
    async fn trait_maps_failures_to_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let coordinates = Coordinates { latitude: 1.0, longitude: 2.0 };
        let err = provider(&server).fetch(coordinates).await.unwrap_err();
        assert!(matches!(err, ForecastError::Upstream(_)));
        assert!(err.message().starts_with("Error while fetching forecast from Open-Meteo"), "{}", err.message());
    }
}
