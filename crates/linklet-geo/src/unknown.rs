use linklet_core::{GeoResolver, UNKNOWN_COUNTRY};
use std::net::IpAddr;

/// Resolver used when no geo database is available. Always answers
/// `"Unknown"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownGeoResolver;

impl GeoResolver for UnknownGeoResolver {
    fn resolve_country(&self, _ip: Option<IpAddr>) -> String {
        UNKNOWN_COUNTRY.to_string()
    }

    fn name(&self) -> &'static str {
        "unknown"
    }
}
