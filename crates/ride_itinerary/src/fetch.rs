use ride_config::ride_config::RideConfig;
use tracing::{debug, error};

use crate::{
    error::ItineraryError,
    itinerary::ItineraryResult,
    text_generator::{GenerationRequest, TextGenerator},
};

/// Parses the model's text answer. Syntax errors and schema mismatches are
/// reported separately.
pub fn parse_itinerary(text: &str) -> Result<ItineraryResult, ItineraryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ItineraryError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(text).map_err(ItineraryError::Parse)?;
    serde_json::from_value(value).map_err(ItineraryError::Schema)
}

/// One generation call for `config`, with the failure cause preserved.
pub async fn try_fetch_itinerary<G>(
    generator: &G,
    config: &RideConfig,
) -> Result<ItineraryResult, ItineraryError>
where
    G: TextGenerator,
{
    let request = GenerationRequest::for_ride(config);
    debug!(
        "Requesting itinerary for {} ({} bikes)",
        config.date,
        config.bikes.len()
    );

    let text = generator.generate(&request).await?;
    parse_itinerary(&text)
}

/// Same as [`try_fetch_itinerary`], but every failure is logged and collapsed
/// into `None` so the view can fall back to an empty state.
pub async fn fetch_itinerary<G>(generator: &G, config: &RideConfig) -> Option<ItineraryResult>
where
    G: TextGenerator,
{
    match try_fetch_itinerary(generator, config).await {
        Ok(itinerary) => Some(itinerary),
        Err(err) => {
            error!(kind = ?err.kind(), "Failed to fetch ride itinerary: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use ride_config::defaults;

    use super::*;
    use crate::{
        error::FailureKind,
        test_utils::{CannedGenerator, sample_itinerary_json},
    };

    #[test]
    fn test_parse_valid_itinerary() {
        let itinerary = parse_itinerary(&sample_itinerary_json()).unwrap();

        assert_eq!(itinerary.itinerary.len(), 3);
        assert_eq!(itinerary.fuel_stations.len(), 2);
        assert_eq!(itinerary.safety_advice.len(), 2);
        assert_eq!(itinerary.bike_maintenance.len(), 1);
        assert_eq!(itinerary.total_distance(), Some(210.0));
    }

    #[test]
    fn test_parse_preserves_order() {
        let itinerary = parse_itinerary(&sample_itinerary_json()).unwrap();
        let locations: Vec<&str> = itinerary
            .itinerary
            .iter()
            .map(|stop| stop.location.as_str())
            .collect();

        // not sorted by distance on purpose, order must come from the service
        assert_eq!(locations, vec!["Setapak", "Temerloh", "Bentong"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_itinerary("{\"itinerary\": [");
        assert_eq!(result.unwrap_err().kind(), FailureKind::Parse);
    }

    #[test]
    fn test_parse_missing_required_field() {
        let result = parse_itinerary(
            r#"{ "itinerary": [], "fuelStations": [], "safetyAdvice": [] }"#,
        );
        assert_eq!(result.unwrap_err().kind(), FailureKind::Schema);
    }

    #[test]
    fn test_parse_missing_item_field() {
        let result = parse_itinerary(
            r#"{
                "itinerary": [{ "location": "Setapak", "time": "06:30", "notes": "" }],
                "fuelStations": [],
                "safetyAdvice": [],
                "bikeMaintenance": []
            }"#,
        );
        assert_eq!(result.unwrap_err().kind(), FailureKind::Schema);
    }

    #[test]
    fn test_parse_empty_response() {
        assert_eq!(
            parse_itinerary("  \n").unwrap_err().kind(),
            FailureKind::Empty
        );
    }

    #[test]
    fn test_parse_empty_arrays() {
        let itinerary = parse_itinerary(
            r#"{ "itinerary": [], "fuelStations": [], "safetyAdvice": [], "bikeMaintenance": [] }"#,
        )
        .unwrap();

        assert!(itinerary.itinerary.is_empty());
        assert_eq!(itinerary.total_distance(), None);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let generator = CannedGenerator::answering(sample_itinerary_json());
        let config = defaults::jerantut_ride();

        let itinerary = fetch_itinerary(&generator, &config).await;

        assert!(itinerary.is_some());
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_returns_none() {
        let generator = CannedGenerator::answering("definitely not json");
        let config = defaults::jerantut_ride();

        assert!(fetch_itinerary(&generator, &config).await.is_none());
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_api_failure_returns_none() {
        let generator = CannedGenerator::failing(401);
        let config = defaults::jerantut_ride();

        assert!(fetch_itinerary(&generator, &config).await.is_none());

        let err = try_fetch_itinerary(&generator, &config).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Auth);
    }

    #[tokio::test]
    async fn test_request_carries_prompt_and_schema() {
        let generator = CannedGenerator::answering(sample_itinerary_json());
        let config = defaults::jerantut_ride();

        fetch_itinerary(&generator, &config).await;

        let request = generator.last_request().unwrap();
        assert!(request.prompt.contains("Setapak -> Bentong -> Temerloh -> Jerantut"));
        assert_eq!(request.response_schema["required"].as_array().unwrap().len(), 4);
    }
}
