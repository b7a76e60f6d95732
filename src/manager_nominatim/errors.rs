use std::fmt;

#[derive(Debug)]
pub enum NominatimError {
    Nominatim(String),
    Document(String),
}

impl fmt::Display for NominatimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NominatimError::Nominatim(e) => write!(f, "NominatimError::Nominatim: {}", e),
            NominatimError::Document(e) => write!(f, "NominatimError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for NominatimError {
    fn from(e: reqwest::Error) -> Self {
        NominatimError::Nominatim(e.to_string())
    }
}
impl From<serde_json::Error> for NominatimError {
    fn from(e: serde_json::Error) -> Self {
        NominatimError::Document(e.to_string())
    }
}
impl From<std::num::ParseFloatError> for NominatimError {
    fn from(e: std::num::ParseFloatError) -> Self {
        NominatimError::Document(e.to_string())
    }
}
