mod errors;
mod logging;
mod initialization;
mod handlers;
mod page;
mod weather_codes;
mod perceived_temperature;
mod forecast_cleaner;
mod narrative;
mod manager_forecast;
mod manager_nominatim;
mod manager_openmeteo;

use actix_web::{middleware, web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_forecast::ForecastService;
use crate::manager_nominatim::Nominatim;
use crate::manager_openmeteo::OpenMeteo;

struct AppState {
    service: ForecastService,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let geocoder = Nominatim::new(
        &config.geocoding.base_url,
        &config.geocoding.user_agent,
        config.geocoding.timeout(),
    )?;
    let provider = OpenMeteo::new(
        &config.forecast.base_url,
        &config.forecast.timezone,
        config.forecast.timeout(),
    )?;
    let timezone = config.forecast.tz()?;

    let state = web::Data::new(AppState {
        service: ForecastService::new(Box::new(geocoder), Box::new(provider), timezone),
    });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(handlers::query_config())
            .wrap(middleware::Logger::default())
            .service(handlers::index)
            .service(handlers::get_forecast)
            .service(handlers::health)
    })
        .bind((config.web_server.bind_address.as_str(), config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
