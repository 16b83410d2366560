use crate::Result;
use async_trait::async_trait;
use linklet_core::ShortCode;
use std::net::IpAddr;

/// Request metadata captured for a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickContext {
    pub ip: Option<IpAddr>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves an active short code to its original URL and records the
    /// click.
    ///
    /// Fails with `NotFound` for unknown codes and `Expired` for codes past
    /// their expiry; no click is recorded in either case.
    async fn redirect(&self, code: &ShortCode, context: ClickContext) -> Result<String>;
}
