use actix_web::{get, web, HttpResponse, Responder};
use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use log::{info, warn};
use crate::AppState;
use crate::manager_forecast::models::{Envelope, ForecastPayload, NoData};
use crate::page;

#[derive(Debug)]
struct ForecastQuery {
    city: Option<String>,
    country: Option<String>,
    format: Option<String>,
}

impl ForecastQuery {
    /// Picks the known parameters, the first value wins when one is repeated
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone());

        ForecastQuery {
            city: first("city"),
            country: first("country"),
            format: first("format"),
        }
    }
}

/// Query extractor config answering undecodable query strings with an error envelope
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        warn!("rejected query: {}", err);
        let envelope: Envelope<NoData> = Envelope::error(&err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(envelope)).into()
    })
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::landing())
}

// city=Berlin&country=Germany[&format=json]
#[get("/get_forecast")]
async fn get_forecast(query: web::Query<Vec<(String, String)>>, data: web::Data<AppState>) -> impl Responder {
    let params = ForecastQuery::from_pairs(&query);
    info!("{:?}", params);

    let (city, country) = match (&params.city, &params.country) {
        (Some(city), Some(country)) => (city, country),
        _ => {
            let missing: Vec<&str> = [("city", &params.city), ("country", &params.country)]
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| *name)
                .collect();
            let envelope: Envelope<NoData> = Envelope::error(&format!("Missing parameters: {}", missing.join(", ")));
            return HttpResponse::BadRequest().json(envelope);
        }
    };

    let (envelope, status) = data.service.get_forecast(city, country).await;
    let as_json = params.format.as_deref() == Some("json");

    if let ForecastPayload::Forecast(forecast) = &envelope.data {
        if !as_json {
            return HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(page::forecast(forecast));
        }
    }

    HttpResponse::build(status).json(envelope)
}

#[get("/health")]
async fn health() -> impl Responder {
    let envelope: Envelope<NoData> = Envelope::success("The API is healthy", NoData {});
    HttpResponse::Ok().json(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use serde_json::{json, Value};
    use crate::forecast_cleaner::tests::raw_forecast;
    use crate::manager_forecast::tests::{berlin, service, FixedGeocoder};

    async fn call(uri: &str, geocoder: FixedGeocoder, hours: usize) -> (StatusCode, String) {
        let state = web::Data::new(AppState { service: service(Box::new(geocoder), raw_forecast(7, hours)) });
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(query_config())
                .service(index)
                .service(get_forecast)
                .service(health),
        ).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn health_is_always_ok() {
        let (status, body) = call("/health", FixedGeocoder(None), 0).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "The API is healthy", "data": {}}));
    }

    #[actix_web::test]
    async fn landing_page() {
        let (status, body) = call("/", FixedGeocoder(None), 0).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<form"));
    }

    #[actix_web::test]
    async fn missing_both_parameters() {
        let (status, body) = call("/get_forecast", FixedGeocoder(Some(berlin())), 48).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({"status": "error", "message": "Missing parameters: city, country", "data": {}}));
    }

    #[actix_web::test]
    async fn missing_country_only() {
        let (status, body) = call("/get_forecast?city=Berlin", FixedGeocoder(Some(berlin())), 48).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["message"], "Missing parameters: country");
    }

    #[actix_web::test]
    async fn success_renders_page() {
        let (status, body) = call("/get_forecast?city=Berlin&country=Germany", FixedGeocoder(Some(berlin())), 48).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<table>"));
        assert!(body.contains("Berlin, Germany"));
    }

    #[actix_web::test]
    async fn success_as_json() {
        let (status, body) = call(
            "/get_forecast?city=Berlin&country=Germany&format=json", FixedGeocoder(Some(berlin())), 48).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "The weather data was successfully retrieved");
        assert_eq!(body["data"]["city"], "Berlin");
        assert_eq!(body["data"]["country"], "Germany");
        assert_eq!(body["data"]["ai_text"], "");
        assert_eq!(body["data"]["hourly"].as_object().unwrap().len(), 12);
        assert_eq!(body["data"]["daily"].as_object().unwrap().len(), 6);
        assert!(body["data"]["daily"]["2026-10-01"]["wetter"].is_string());
        assert!(body["data"]["daily"]["2026-10-01"]["max_temp"].is_number());
    }

    #[actix_web::test]
    async fn repeated_parameter_takes_first_value() {
        let (status, body) = call(
            "/get_forecast?city=Berlin&city=Paris&country=Germany&format=json", FixedGeocoder(Some(berlin())), 48).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["city"], "Berlin");
        assert_eq!(body["data"]["country"], "Germany");
    }

    #[::core::prelude::v1::test]
    fn first_value_wins() {
        let pairs = vec![
            ("country".to_string(), "Germany".to_string()),
            ("city".to_string(), "Berlin".to_string()),
            ("city".to_string(), "Paris".to_string()),
        ];
        let query = ForecastQuery::from_pairs(&pairs);

        assert_eq!(query.city.as_deref(), Some("Berlin"));
        assert_eq!(query.country.as_deref(), Some("Germany"));
        assert_eq!(query.format, None);
    }

    #[actix_web::test]
    async fn unknown_place_forwards_envelope() {
        let (status, body) = call("/get_forecast?city=Atlantis&country=Nowhere", FixedGeocoder(None), 48).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "We could not find the coordinates for the City: Atlantis in the Country: Nowhere");
        assert_eq!(body["data"], json!({}));
    }

    #[actix_web::test]
    async fn processing_failure_forwards_envelope() {
        let (status, body) = call("/get_forecast?city=Berlin&country=Germany", FixedGeocoder(Some(berlin())), 3).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "error");
    }
}
