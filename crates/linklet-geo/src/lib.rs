//! Geo resolvers that map a requester IP to a coarse country code.
//!
//! All resolvers are best-effort and never fail; see [`GeoResolver`].

pub mod maxmind;
pub mod unknown;

pub use linklet_core::{GeoResolver, UNKNOWN_COUNTRY};
pub use maxmind::{GeoDbError, MaxMindGeoResolver};
pub use unknown::UnknownGeoResolver;

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Picks the resolver to use at startup.
///
/// A configured and readable MaxMind database wins; otherwise every lookup
/// reports `"Unknown"`.
pub fn from_database_path(path: Option<&Path>) -> Arc<dyn GeoResolver> {
    let resolver: Arc<dyn GeoResolver> = match path {
        Some(path) => match MaxMindGeoResolver::open(path) {
            Ok(resolver) => Arc::new(resolver),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load geoip database, countries will be reported as unknown");
                Arc::new(UnknownGeoResolver)
            }
        },
        None => {
            debug!("no geoip database configured");
            Arc::new(UnknownGeoResolver)
        }
    };

    info!(provider = resolver.name(), "geo resolver initialized");
    resolver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_falls_back_to_unknown() {
        let resolver = from_database_path(None);
        assert_eq!(resolver.name(), "unknown");
    }

    #[test]
    fn unreadable_database_falls_back_to_unknown() {
        let resolver = from_database_path(Some(Path::new("/nonexistent/GeoLite2-Country.mmdb")));
        assert_eq!(resolver.name(), "unknown");
        assert_eq!(
            resolver.resolve_country(Some("8.8.8.8".parse().unwrap())),
            UNKNOWN_COUNTRY
        );
    }
}
