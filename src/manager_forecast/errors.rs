use std::fmt;
use actix_web::http::StatusCode;
use crate::forecast_cleaner::errors::CleanError;
use crate::manager_nominatim::errors::NominatimError;
use crate::manager_openmeteo::errors::OpenMeteoError;

/// Failures of a forecast request, each carrying a message fit for the caller
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The place could not be located
    NotFound(String),
    /// The raw forecast could not be cleaned
    Processing(String),
    /// Geocoding or forecast provider failed
    Upstream(String),
}

impl ForecastError {
    pub fn message(&self) -> &str {
        match self {
            ForecastError::NotFound(m) | ForecastError::Processing(m) | ForecastError::Upstream(m) => m,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ForecastError::NotFound(_) => StatusCode::BAD_REQUEST,
            ForecastError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ForecastError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::NotFound(e) => write!(f, "ForecastError::NotFound: {}", e),
            ForecastError::Processing(e) => write!(f, "ForecastError::Processing: {}", e),
            ForecastError::Upstream(e) => write!(f, "ForecastError::Upstream: {}", e),
        }
    }
}
impl From<CleanError> for ForecastError {
    fn from(e: CleanError) -> Self {
        ForecastError::Processing(e.0)
    }
}
impl From<NominatimError> for ForecastError {
    fn from(e: NominatimError) -> Self {
        match e {
            NominatimError::Nominatim(m) | NominatimError::Document(m) => ForecastError::Upstream(m),
        }
    }
}
impl From<OpenMeteoError> for ForecastError {
    fn from(e: OpenMeteoError) -> Self {
        match e {
            OpenMeteoError::OpenMeteo(m) | OpenMeteoError::Document(m) => ForecastError::Upstream(m),
        }
    }
}
