use thiserror::Error;

/// Failure taxonomy for the lookup pipeline. The variant decides both the
/// message shown to the user and whether the last good view survives.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No query and no coordinates; nothing to resolve.
    #[error("No search query or coordinates were provided")]
    InvalidInput,

    /// Transport or decode failure against one of the upstream APIs.
    /// `stage` names the pipeline step ("city", "weather") for the message.
    #[error("Failed to fetch {stage} data")]
    Network {
        stage: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The geocoder returned no candidate for the query.
    #[error("No geocoding result for {0}")]
    NotFound(String),

    /// The weather API answered but carried no usable current conditions.
    #[error("No weather data found for this location.")]
    NoData,
}

impl LookupError {
    pub fn network(stage: &'static str, source: reqwest::Error) -> Self {
        Self::Network { stage, source }
    }

    /// Whether this failure invalidates the previously displayed weather.
    /// Only a confirmed-empty response does; transient failures keep the
    /// stale view on screen (unless the user opted into clearing).
    #[must_use]
    pub fn clears_display(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_stage() {
        assert_eq!(
            LookupError::InvalidInput.to_string(),
            "No search query or coordinates were provided"
        );
        assert_eq!(
            LookupError::NotFound("Atlantis".to_string()).to_string(),
            "No geocoding result for Atlantis"
        );
        assert_eq!(
            LookupError::NoData.to_string(),
            "No weather data found for this location."
        );
    }

    #[test]
    fn only_confirmed_empty_data_clears_the_display() {
        assert!(LookupError::NoData.clears_display());
        assert!(!LookupError::InvalidInput.clears_display());
        assert!(!LookupError::NotFound(String::new()).clears_display());
    }
}
