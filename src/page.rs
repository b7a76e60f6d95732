use crate::manager_forecast::models::ForecastData;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<title>Wettervorhersage</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin-bottom: 2em; }
th, td { border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: left; }
</style>
</head>
<body>
"#;

const SEARCH_FORM: &str = r#"<form action="/get_forecast" method="get">
<input name="city" placeholder="Stadt" required>
<input name="country" placeholder="Land" required>
<button type="submit">Vorhersage</button>
</form>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Static landing page with the search form
pub fn landing() -> String {
    format!("{}<h1>Wettervorhersage</h1>\n{}{}", HEAD, SEARCH_FORM, TAIL)
}

/// Renders the forecast tables for one place
pub fn forecast(data: &ForecastData) -> String {
    let mut html = String::from(HEAD);

    html.push_str(&format!("<h1>Wetter f&uuml;r {}, {}</h1>\n", escape(&data.city), escape(&data.country)));
    if !data.ai_text.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape(&data.ai_text)));
    }

    html.push_str("<h2>N&auml;chste 12 Stunden</h2>\n<table>\n");
    html.push_str("<tr><th>Zeit</th><th>Wetter</th><th>Temp. (&deg;C)</th><th>Gef&uuml;hlt (&deg;C)</th>\
                   <th>Niederschlag (mm)</th><th>Wind (km/h)</th><th>Richtung (&deg;)</th>\
                   <th>Luftdruck (hPa)</th><th>Luftfeuchte (%)</th></tr>\n");
    for (time, h) in &data.forecast.hourly {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(time), escape(h.condition), value(h.temp), value(h.perceived_temp), value(h.precipitation),
            value(h.wind_speed), value(h.wind_direction), value(h.pressure), value(h.humidity),
        ));
    }
    html.push_str("</table>\n");

    html.push_str("<h2>N&auml;chste Tage</h2>\n<table>\n");
    html.push_str("<tr><th>Datum</th><th>Wetter</th><th>Max (&deg;C)</th><th>Min (&deg;C)</th>\
                   <th>Niederschlag (mm)</th><th>Wind max (km/h)</th><th>Richtung (&deg;)</th></tr>\n");
    for (date, d) in &data.forecast.daily {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(date), escape(d.condition), value(d.max_temp), value(d.min_temp),
            value(d.precipitation), value(d.wind_speed), value(d.wind_direction),
        ));
    }
    html.push_str("</table>\n");

    html.push_str(SEARCH_FORM);
    html.push_str(TAIL);
    html
}

fn value(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{}", v))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
