use crate::events::registry::EventRegistry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State shared by every handler.
///
/// Mutating handlers hold the write guard across the whole registry call, which keeps
/// the capacity and unique-email checks atomic with the append.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<EventRegistry>>,
}

impl AppState {
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}
