use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const BASE_URL_ENV: &str = "BASE_URL";
pub const DEFAULT_VALIDITY_ENV: &str = "LINKLET_DEFAULT_VALIDITY_MINUTES";
pub const MAX_GENERATION_ATTEMPTS_ENV: &str = "LINKLET_MAX_GENERATION_ATTEMPTS";
pub const GEOIP_DB_ENV: &str = "LINKLET_GEOIP_DB";
pub const LOG_FILE_ENV: &str = "LINKLET_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "LINKLET_LOG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILE: &str = "logs/app.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Parser)]
#[command(name = "linklet", about = "In-memory URL shortener with click analytics")]
pub struct CLI {
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Public base URL used to build short links. Defaults to the scheme
    /// and `Host` of the incoming request.
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(
        long,
        env = DEFAULT_VALIDITY_ENV,
        default_value_t = linklet_shortener::settings::DEFAULT_VALIDITY_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub default_validity_minutes: u32,

    #[arg(
        long,
        env = MAX_GENERATION_ATTEMPTS_ENV,
        default_value_t = linklet_shortener::settings::DEFAULT_MAX_GENERATION_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_generation_attempts: u32,

    /// MaxMind GeoLite2/GeoIP2 database used to resolve click countries.
    #[arg(long, env = GEOIP_DB_ENV)]
    pub geoip_db: Option<PathBuf>,

    /// JSON-lines log file; an empty value logs to stdout.
    #[arg(long, env = LOG_FILE_ENV, default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    #[arg(long, env = LOG_FILTER_ENV, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl CLI {
    pub fn log_file(&self) -> Option<PathBuf> {
        let trimmed = self.log_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    pub fn base_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = CLI::try_parse_from([
            "linklet",
            "--port",
            "8080",
            "--base-url",
            "https://lnk.to/",
            "--log-file",
            "",
        ])
        .unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.base_url().as_deref(), Some("https://lnk.to"));
        assert_eq!(cli.log_file(), None);
    }

    #[test]
    fn zero_validity_is_rejected() {
        assert!(CLI::try_parse_from(["linklet", "--default-validity-minutes", "0"]).is_err());
    }
}
