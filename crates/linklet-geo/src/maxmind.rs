use linklet_core::{GeoResolver, UNKNOWN_COUNTRY};
use maxminddb::Reader;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
#[error("cannot open geoip database {path}: {source}")]
pub struct GeoDbError {
    path: PathBuf,
    #[source]
    source: maxminddb::MaxMindDbError,
}

/// Resolver backed by a local MaxMind GeoLite2 / GeoIP2 database.
pub struct MaxMindGeoResolver {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoResolver {
    /// Loads the whole `.mmdb` file into memory.
    pub fn open(path: &Path) -> Result<Self, GeoDbError> {
        let reader = Reader::open_readfile(path).map_err(|source| GeoDbError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { reader })
    }

    fn lookup(&self, ip: IpAddr) -> Option<String> {
        let result = self.reader.lookup(ip).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;
        city.country.iso_code.map(String::from)
    }
}

impl std::fmt::Debug for MaxMindGeoResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxMindGeoResolver").finish_non_exhaustive()
    }
}

impl GeoResolver for MaxMindGeoResolver {
    fn resolve_country(&self, ip: Option<IpAddr>) -> String {
        let Some(ip) = ip else {
            return UNKNOWN_COUNTRY.to_string();
        };

        let country = self.lookup(ip);
        trace!(%ip, ?country, "geoip lookup");
        country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string())
    }

    fn name(&self) -> &'static str {
        "maxmind"
    }
}
