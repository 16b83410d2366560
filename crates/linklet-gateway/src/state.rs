use std::sync::Arc;

use linklet_core::{Clock, GeoResolver, Shortener};
use linklet_generator::RandomGenerator;
use linklet_redirector::{Redirector, RedirectorService};
use linklet_shortener::{ShortenerService, ShortenerSettings};
use linklet_storage::InMemoryRegistry;

use crate::app::RESERVED_PATHS;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    clock: Arc<dyn Clock>,
    base_url: Option<String>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        clock: Arc<dyn Clock>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            clock,
            base_url: public_base_url,
        }
    }

    /// Wires both services to one fresh in-memory registry. Route names are
    /// added to the reserved codes.
    pub fn in_memory(
        settings: ShortenerSettings,
        geo: Arc<dyn GeoResolver>,
        clock: Arc<dyn Clock>,
        public_base_url: Option<String>,
    ) -> Self {
        let registry = Arc::new(InMemoryRegistry::new());
        let shortener = ShortenerService::with_clock(
            Arc::clone(&registry),
            RandomGenerator::new(),
            Arc::clone(&clock),
        )
        .settings(settings.with_reserved_codes(RESERVED_PATHS.iter().copied()));
        let redirector = RedirectorService::with_clock(registry, geo, Arc::clone(&clock));

        Self::new(
            Arc::new(shortener),
            Arc::new(redirector),
            clock,
            public_base_url,
        )
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The configured public base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}
