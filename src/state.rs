//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheService;

/// Allocator bound to whichever store backend was configured at startup.
pub type DynShortenerService = ShortenerService<dyn MappingRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(shortener: Arc<DynShortenerService>, cache: Arc<dyn CacheService>) -> Self {
        Self { shortener, cache }
    }
}
