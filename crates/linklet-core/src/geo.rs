use std::net::IpAddr;

/// Country reported when a requester's location cannot be determined.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Best-effort lookup from a requester IP to a country code.
///
/// Implementations must never fail: a missing address, an address that is
/// not in the database, or any lookup error yields [`UNKNOWN_COUNTRY`].
pub trait GeoResolver: Send + Sync + 'static {
    fn resolve_country(&self, ip: Option<IpAddr>) -> String;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}
