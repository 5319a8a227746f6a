use ride_config::ride_file::RideFile;
use ride_itinerary::{gemini_client::GeminiClient, loader::ItineraryLoader};

pub struct AppState {
    pub ride_file: RideFile,
    pub itinerary: ItineraryLoader<GeminiClient>,
}

impl AppState {
    pub fn new(ride_file: RideFile, gemini: GeminiClient) -> Self {
        let itinerary = ItineraryLoader::new(gemini, ride_file.ride.clone());
        AppState {
            ride_file,
            itinerary,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use ride_itinerary::gemini_client::GeminiClientParams;

    AppState::new(
        RideFile::default(),
        GeminiClient::new(GeminiClientParams {
            api_key: String::new(),
            model: "test".to_string(),
            // nothing listens here, loads fail fast instead of reaching the network
            base_url: "http://127.0.0.1:1".to_string(),
        }),
    )
}
