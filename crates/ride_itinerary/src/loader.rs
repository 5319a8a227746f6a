use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::{Mutex, RwLock};
use ride_config::ride_config::RideConfig;
use serde::Serialize;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info};

use crate::{fetch::fetch_itinerary, itinerary::ItineraryResult, text_generator::TextGenerator};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "itinerary", rename_all = "snake_case")]
pub enum ItineraryState {
    /// Nothing requested, or the view was unmounted
    Idle,
    Loading,
    Ready(ItineraryResult),
    /// The fetch settled without a usable itinerary
    Unavailable,
}

struct LoaderShared {
    generation: AtomicU64,
    state: RwLock<ItineraryState>,
    /// Held for the whole generation call, at most one request is in flight.
    request_slot: tokio::sync::Mutex<()>,
    pending: Mutex<Option<AbortHandle>>,
}

impl LoaderShared {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn abort_pending(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    fn settle(&self, generation: u64, itinerary: Option<ItineraryResult>) {
        let mut state = self.state.write();

        if !self.is_current(generation) {
            debug!("Discarding itinerary from stale load {}", generation);
            return;
        }

        *state = match itinerary {
            Some(itinerary) => ItineraryState::Ready(itinerary),
            None => ItineraryState::Unavailable,
        };
    }
}

/// Holds the itinerary of one page view. Each `load` issues exactly one
/// request and cancels the one still pending, so requests never overlap.
/// Results of loads that were superseded or unmounted are dropped.
pub struct ItineraryLoader<G> {
    generator: Arc<G>,
    config: Arc<RideConfig>,
    shared: Arc<LoaderShared>,
}

impl<G> ItineraryLoader<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn new(generator: G, config: RideConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            config: Arc::new(config),
            shared: Arc::new(LoaderShared {
                generation: AtomicU64::new(0),
                state: RwLock::new(ItineraryState::Idle),
                request_slot: tokio::sync::Mutex::new(()),
                pending: Mutex::new(None),
            }),
        }
    }

    /// Starts a fresh load. Must be called from within a tokio runtime.
    pub fn load(&self) -> JoinHandle<()> {
        let generation = {
            let mut state = self.shared.state.write();
            *state = ItineraryState::Loading;
            self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        info!("Loading ride itinerary (load {})", generation);

        let generator = Arc::clone(&self.generator);
        let config = Arc::clone(&self.config);
        let shared = Arc::clone(&self.shared);

        let handle = tokio::spawn(async move {
            let _slot = shared.request_slot.lock().await;
            if !shared.is_current(generation) {
                debug!("Load {} superseded before its request", generation);
                return;
            }

            let itinerary = fetch_itinerary(generator.as_ref(), &config).await;
            shared.settle(generation, itinerary);
        });

        if let Some(previous) = self.shared.pending.lock().replace(handle.abort_handle()) {
            previous.abort();
        }

        handle
    }

    /// Detaches the view and cancels the pending request, if any.
    pub fn unmount(&self) {
        {
            let mut state = self.shared.state.write();
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            *state = ItineraryState::Idle;
        }
        self.shared.abort_pending();
    }

    pub fn state(&self) -> ItineraryState {
        self.shared.state.read().clone()
    }
}
