pub mod errors;
pub mod models;

use actix_web::http::StatusCode;
use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use log::{error, info, warn};
use crate::forecast_cleaner::{clean, current_hour};
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{Coordinates, Envelope, ForecastData, ForecastPayload};
use crate::manager_openmeteo::models::RawForecast;
use crate::narrative::{NarrativeGenerator, NoNarrative};

pub const SUCCESS_MESSAGE: &str = "The weather data was successfully retrieved";

/// Resolves free text place names into coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &str) -> Result<Option<Coordinates>, ForecastError>;
}

/// Fetches the raw daily and hourly forecast for a position
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch(&self, coordinates: Coordinates) -> Result<RawForecast, ForecastError>;
}

/// Runs the geocode, fetch, clean and assemble pipeline for one request.
///
/// Holds no per-request state, a single instance serves all requests.
pub struct ForecastService {
    geocoder: Box<dyn Geocoder>,
    provider: Box<dyn ForecastProvider>,
    narrative: Box<dyn NarrativeGenerator>,
    timezone: Tz,
}

impl ForecastService {
    /// Creates a service with the empty narrative generator
    ///
    /// # Arguments
    ///
    /// * 'geocoder' - place name resolver
    /// * 'provider' - forecast source
    /// * 'timezone' - reference timezone for selecting the current hour
    pub fn new(geocoder: Box<dyn Geocoder>, provider: Box<dyn ForecastProvider>, timezone: Tz) -> Self {
        Self {
            geocoder,
            provider,
            narrative: Box::new(NoNarrative),
            timezone,
        }
    }

    pub fn with_narrative(mut self, narrative: Box<dyn NarrativeGenerator>) -> Self {
        self.narrative = narrative;
        self
    }

    /// Returns the response envelope and status code for a forecast request
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as given by the caller
    /// * 'country' - country name as given by the caller
    pub async fn get_forecast(&self, city: &str, country: &str) -> (Envelope<ForecastPayload>, StatusCode) {
        match self.forecast_data(city, country).await {
            Ok(data) => (
                Envelope::success(SUCCESS_MESSAGE, ForecastPayload::Forecast(data)),
                StatusCode::OK,
            ),
            Err(e) => {
                match &e {
                    ForecastError::NotFound(_) => warn!("{}", e),
                    _ => error!("{}", e),
                }
                (Envelope::error(e.message()), e.status_code())
            }
        }
    }

    /// Runs the pipeline, returning the assembled data or the first failure
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as given by the caller
    /// * 'country' - country name as given by the caller
    pub async fn forecast_data(&self, city: &str, country: &str) -> Result<ForecastData, ForecastError> {
        let coordinates = self.geocoder
            .resolve(&format!("{}, {}", city, country))
            .await?
            .ok_or_else(|| ForecastError::NotFound(format!(
                "We could not find the coordinates for the City: {} in the Country: {}", city, country)))?;

        let raw = self.provider.fetch(coordinates).await?;

        let hour = current_hour(&self.timezone, Utc::now());
        let forecast = clean(&raw, hour)?;
        info!("cleaned forecast for {}, {}: {} days, {} hours",
              city, country, forecast.daily.len(), forecast.hourly.len());

        let ai_text = self.narrative.generate(&forecast);

        Ok(ForecastData {
            forecast,
            city: city.to_string(),
            country: country.to_string(),
            ai_text,
        })
    }
}
