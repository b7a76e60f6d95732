use serde::Deserialize;

/// One hit from the Nominatim search endpoint, coordinates come as strings
#[derive(Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
