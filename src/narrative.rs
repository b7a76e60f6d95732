use crate::forecast_cleaner::models::CleanedForecast;

/// Produces a free text summary for a cleaned forecast.
///
/// Implementations may return an empty string when they have nothing to say.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, forecast: &CleanedForecast) -> String;
}

/// Default generator, no text generation backend is wired in yet
pub struct NoNarrative;

impl NarrativeGenerator for NoNarrative {
    fn generate(&self, _forecast: &CleanedForecast) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generator_is_empty() {
        assert_eq!(NoNarrative.generate(&CleanedForecast::default()), "");
    }
}
