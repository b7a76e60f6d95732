pub mod errors;
mod models;

use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::Coordinates;
use crate::manager_forecast::Geocoder;
use crate::manager_nominatim::errors::NominatimError;
use crate::manager_nominatim::models::Place;

/// Struct for resolving free text place names through Nominatim (OpenStreetMap)
pub struct Nominatim {
    client: Client,
    base_url: String,
}

impl Nominatim {
    /// Returns a Nominatim struct ready for geocoding
    ///
    /// Nominatim's usage policy requires an identifying user agent.
    ///
    /// # Arguments
    ///
    /// * 'base_url' - full url of the search endpoint
    /// * 'user_agent' - user agent sent with every request
    /// * 'timeout' - request timeout
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Nominatim, NominatimError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Looks up the best match for a place name, `None` if nothing matched
    ///
    /// # Arguments
    ///
    /// * 'place' - free text place, e.g. "Berlin, Germany"
    pub async fn search(&self, place: &str) -> Result<Option<Coordinates>, NominatimError> {
        debug!("geocoding '{}'", place);

        let req = self.client
            .get(&self.base_url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(NominatimError::Nominatim(format!("Error while geocoding with Nominatim: {}", status)));
        }

        let json = req.text().await?;
        let places: Vec<Place> = serde_json::from_str(&json)?;

        match places.into_iter().next() {
            Some(p) => {
                let coordinates = Coordinates {
                    latitude: p.lat.trim().parse()?,
                    longitude: p.lon.trim().parse()?,
                };
                info!("resolved '{}' to {} ({}/{})",
                      place, p.display_name.unwrap_or_default(), coordinates.latitude, coordinates.longitude);
                Ok(Some(coordinates))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    async fn resolve(&self, place: &str) -> Result<Option<Coordinates>, ForecastError> {
        Ok(self.search(place).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoder(server: &MockServer) -> Nominatim {
        Nominatim::new(&format!("{}/search", server.uri()), "weatherforecast-test", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn resolves_first_hit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Berlin, Germany"))
            .and(query_param("format", "json"))
            .and(header("user-agent", "weatherforecast-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "52.5170365", "lon": "13.3888599", "display_name": "Berlin, Deutschland"}
            ])))
            .mount(&server)
            .await;

        let coordinates = geocoder(&server).search("Berlin, Germany").await.unwrap().unwrap();

        assert!((coordinates.latitude - 52.5170365).abs() < 1e-9);
        assert!((coordinates.longitude - 13.3888599).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_result_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let result = geocoder(&server).resolve("Atlantis, Nowhere").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn bad_coordinates_are_a_document_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "north", "lon": "13.4"}
            ])))
            .mount(&server)
            .await;

        let err = geocoder(&server).search("Berlin, Germany").await.unwrap_err();
        assert!(matches!(err, NominatimError::Document(_)));
    }

    #[tokio::test]
    async fn http_failure_maps_to_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = geocoder(&server).resolve("Berlin, Germany").await.unwrap_err();
        assert!(matches!(err, ForecastError::Upstream(_)));
        assert!(!err.message().contains("NominatimError"), "{}", err.message());
        assert!(err.message().contains("429"));
    }
}
