use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::{
    error::ItineraryError,
    text_generator::{GenerationRequest, TextGenerator},
};

pub fn sample_itinerary_json() -> String {
    r#"{
        "itinerary": [
            { "location": "Setapak", "time": "06:30", "distanceFromStart": 0, "notes": "Briefing and tyre check" },
            { "location": "Temerloh", "time": "09:15", "distanceFromStart": 160.5, "notes": "Breakfast" },
            { "location": "Bentong", "time": "08:00", "distanceFromStart": 210, "notes": "Listed out of order" }
        ],
        "fuelStations": [
            { "name": "Petronas Bentong", "location": "Jalan Ketari", "brand": "Petronas", "whyStop": "RS150 4.5L tank covers about 120km, top up before the highway" },
            { "name": "Shell Temerloh", "location": "Jalan Sudirman", "brand": "Shell", "whyStop": "Second leg is 110km with no stations" }
        ],
        "safetyAdvice": ["Ride in staggered formation", "Rain gear within reach"],
        "bikeMaintenance": ["Lube the chain the night before"]
    }"#
    .to_string()
}

/// Answers every request with the same text, or the same API error status.
pub struct CannedGenerator {
    answer: Result<String, u16>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl CannedGenerator {
    pub fn answering<S: Into<String>>(text: S) -> Self {
        CannedGenerator {
            answer: Ok(text.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(status: u16) -> Self {
        CannedGenerator {
            answer: Err(status),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().clone()
    }
}

impl TextGenerator for CannedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ItineraryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        match &self.answer {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ItineraryError::Api {
                status: *status,
                message: "canned failure".to_string(),
            }),
        }
    }
}
