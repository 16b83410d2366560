use std::sync::Arc;

use crate::redirector::{ClickContext, Redirector};
use crate::RedirectorError;
use async_trait::async_trait;
use linklet_core::{ClickEvent, Clock, GeoResolver, Registry, ShortCode, SystemClock};
use tracing::{debug, info, trace, warn};

/// Service for handling URL redirects.
///
/// Fetches records from the registry, performs the expiry check and records
/// clicks. Geo lookup runs before the registry is touched, so the registry
/// never waits on it.
pub struct RedirectorService<R> {
    registry: Arc<R>,
    geo: Arc<dyn GeoResolver>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            geo: Arc::clone(&self.geo),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: Registry> RedirectorService<R> {
    /// Creates a new RedirectorService using the system clock.
    pub fn new(registry: Arc<R>, geo: Arc<dyn GeoResolver>) -> Self {
        Self::with_clock(registry, geo, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Arc<R>, geo: Arc<dyn GeoResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            geo,
            clock,
        }
    }
}

#[async_trait]
impl<R: Registry> Redirector for RedirectorService<R> {
    async fn redirect(&self, code: &ShortCode, context: ClickContext) -> crate::Result<String> {
        trace!(code = %code, "resolving short code");

        let Some(record) = self.registry.get(code).await? else {
            trace!(code = %code, "short code not found");
            return Err(RedirectorError::NotFound(code.clone()));
        };

        let now = self.clock.now();
        if record.is_expired_at(now) {
            warn!(code = %code, expiry = %record.expiry, "expired_shortlink_access");
            return Err(RedirectorError::Expired(code.clone()));
        }

        let country = self.geo.resolve_country(context.ip);
        let click = ClickEvent {
            timestamp: now,
            referrer: context.referrer,
            user_agent: context.user_agent,
            country,
        };

        if !self.registry.record_click(code, click).await? {
            // no deletion exists, so this only happens with a foreign registry
            debug!(code = %code, "record vanished before the click was stored");
        }

        info!(code = %code, to = %record.original_url, "redirect");
        Ok(record.original_url)
    }
}
