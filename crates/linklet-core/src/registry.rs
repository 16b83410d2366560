use crate::error::Result;
use crate::record::{ClickEvent, ShortLinkRecord};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// A read-only view of the short link registry.
///
/// Registries never look at expiry; an expired record is still returned so
/// that its analytics stay available.
#[async_trait]
pub trait ReadRegistry: Send + Sync + 'static {
    /// Retrieves a snapshot of the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>>;

    /// Checks whether a short code is already registered.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

#[async_trait]
pub trait Registry: ReadRegistry {
    /// Inserts a new record keyed by `record.shortcode` if, and only if, the
    /// code is not registered yet. The check and the insert happen as one
    /// step; returns `Err(Conflict)` if the code already exists.
    async fn create(&self, record: ShortLinkRecord) -> Result<()>;

    /// Appends a click to the record of `code`, bumping its hit count and
    /// last access time in the same step.
    ///
    /// Returns `false` (and changes nothing) if the code does not exist.
    async fn record_click(&self, code: &ShortCode, click: ClickEvent) -> Result<bool>;
}
