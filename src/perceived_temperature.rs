/// Perceived ("feels like") temperature in Celsius for an hourly forecast slot.
///
/// Returns `None` when the provider left any of the inputs empty.
///
/// # Arguments
///
/// * 'temp' - air temperature in Celsius
/// * 'humidity' - relative humidity in percent
/// * 'wind_speed' - wind speed in km/h, as Open-Meteo reports it
pub fn perceived_temperature(temp: Option<f64>, humidity: Option<f64>, wind_speed: Option<f64>) -> Option<f64> {
    let temp = celsius_to_fahrenheit(temp?);
    let mph = kmh_to_mph(wind_speed?);
    let humidity = humidity?;

    let feels_like = if temp <= 50.0 && mph > 3.0 {
        wind_chill(temp, mph)
    } else {
        heat_index(temp, humidity)
    };

    Some(fahrenheit_to_celsius(feels_like))
}

/// Wind chill in Fahrenheit, https://www.weather.gov/safety/cold-wind-chill-chart
fn wind_chill(temp: f64, mph: f64) -> f64 {
    let v = mph.powf(0.16);
    35.74 + 0.6215 * temp - 35.75 * v + 0.4275 * temp * v
}

/// Heat index in Fahrenheit (Rothfusz regression with NOAA adjustments),
/// https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml
fn heat_index(temp: f64, humidity: f64) -> f64 {
    let simple = 0.5 * (temp + 61.0 + (temp - 68.0) * 1.2 + humidity * 0.094);
    if simple < 80.0 {
        return simple;
    }

    let t = temp;
    let rh = humidity;
    let mut hi = -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        hi -= ((13.0 - rh) / 4.0) * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        hi += ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    hi
}

fn celsius_to_fahrenheit(temp: f64) -> f64 {
    temp * 1.8 + 32.0
}

/// Rounds to the nearest tenth
fn fahrenheit_to_celsius(temp: f64) -> f64 {
    ((temp - 32.0) / 1.8 * 10.0).round() / 10.0
}

fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / 1.609344
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_and_windy_uses_wind_chill() {
        // -5 C at 30 km/h feels like roughly -12 C
        let feels = perceived_temperature(Some(-5.0), Some(70.0), Some(30.0)).unwrap();
        assert!(feels < -10.0 && feels > -14.0, "got {}", feels);
    }

    #[test]
    fn calm_mild_weather_stays_close() {
        let feels = perceived_temperature(Some(18.0), Some(50.0), Some(2.0)).unwrap();
        assert!((feels - 18.0).abs() < 1.5, "got {}", feels);
    }

    #[test]
    fn hot_and_humid_feels_hotter() {
        let feels = perceived_temperature(Some(32.0), Some(70.0), Some(5.0)).unwrap();
        assert!(feels > 36.0, "got {}", feels);
    }

    #[test]
    fn missing_input_gives_none() {
        assert_eq!(perceived_temperature(None, Some(50.0), Some(10.0)), None);
        assert_eq!(perceived_temperature(Some(10.0), None, Some(10.0)), None);
        assert_eq!(perceived_temperature(Some(10.0), Some(50.0), None), None);
    }
}
