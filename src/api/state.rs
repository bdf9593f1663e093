use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::services::{DatasetStore, ItineraryAssembler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

/// Everything a request handler needs. Only the random source is mutable.
pub struct AppStateInner {
    pub dataset: DatasetStore,
    pub assembler: ItineraryAssembler,
    pub max_days: i64,
    pub rng: Mutex<StdRng>,
}

impl AppState {
    /// Wraps a loaded dataset with the engine settings from `config`
    pub fn new(dataset: DatasetStore, config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            inner: Arc::new(AppStateInner {
                dataset,
                assembler: ItineraryAssembler::new(config.shortlist_size),
                max_days: config.max_days,
                rng: Mutex::new(rng),
            }),
        }
    }
}
