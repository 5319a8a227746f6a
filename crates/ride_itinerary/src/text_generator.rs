use std::future::Future;

use ride_config::ride_config::RideConfig;

use crate::{error::ItineraryError, prompt::build_prompt, response_schema::response_schema};

/// A single structured-output generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: serde_json::Value,
}

impl GenerationRequest {
    pub fn for_ride(config: &RideConfig) -> Self {
        GenerationRequest {
            prompt: build_prompt(config),
            response_schema: response_schema(),
        }
    }
}

/// Sends a request to a generative model and returns the raw text it answered.
pub trait TextGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, ItineraryError>> + Send;
}
