use crate::settings::ShortenerSettings;
use async_trait::async_trait;
use jiff::Timestamp;
use linklet_core::{
    is_valid_url, Clock, Registry, ShortCode, ShortLinkRecord, ShortenParams, Shortener,
    ShortenerError, StorageError, SystemClock, Validity,
};
use linklet_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Registry` and a `Generator` to handle:
/// - URL and custom short code validation
/// - Short code generation with collision retry
/// - Expiry computation from the requested validity
///
/// Uniqueness is enforced by the registry's atomic `create`; a generated
/// code that collides is simply replaced by a fresh candidate, up to
/// `max_generation_attempts` times.
pub struct ShortenerService<R, G> {
    registry: Arc<R>,
    generator: Arc<G>,
    clock: Arc<dyn Clock>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            generator: Arc::clone(&self.generator),
            clock: Arc::clone(&self.clock),
            settings: self.settings.clone(),
        }
    }
}

impl<R: Registry, G: Generator> ShortenerService<R, G> {
    /// Creates a service using the system clock and default settings.
    pub fn new(registry: Arc<R>, generator: G) -> Self {
        Self::with_clock(registry, generator, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Arc<R>, generator: G, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            generator: Arc::new(generator),
            clock,
            settings: ShortenerSettings::default(),
        }
    }

    pub fn settings(mut self, settings: ShortenerSettings) -> Self {
        self.settings = settings;
        self
    }

    fn expiry_from(&self, now: Timestamp, validity: Validity) -> Timestamp {
        validity
            .to_duration()
            .and_then(|duration| now.checked_add(duration).ok())
            .or_else(|| now.checked_add(self.settings.default_validity()).ok())
            .unwrap_or(Timestamp::MAX)
    }

    async fn create_custom(&self, record: ShortLinkRecord) -> Result<ShortLinkRecord, ShortenerError> {
        if self.settings.is_reserved(record.shortcode.as_str()) {
            debug!(code = %record.shortcode, "custom short code is reserved");
            return Err(ShortenerError::ShortCodeInUse(record.shortcode.to_string()));
        }
        self.registry.create(record.clone()).await?;
        Ok(record)
    }

    async fn create_generated(
        &self,
        original_url: String,
        created_at: Timestamp,
        expiry: Timestamp,
    ) -> Result<ShortLinkRecord, ShortenerError> {
        let attempts = self.settings.max_generation_attempts.max(1);

        for attempt in 1..=attempts {
            let code: ShortCode = self.generator.generate().into();
            if self.settings.is_reserved(code.as_str()) {
                debug!(code = %code, attempt, "generated short code is reserved, retrying");
                continue;
            }
            let record = ShortLinkRecord::new(code, original_url.clone(), created_at, expiry);

            match self.registry.create(record.clone()).await {
                Ok(()) => return Ok(record),
                Err(StorageError::Conflict(code)) => {
                    debug!(code = %code, attempt, "generated short code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(attempts, "gave up generating a unique short code");
        Err(ShortenerError::GenerationExhausted(attempts))
    }
}

#[async_trait]
impl<R: Registry, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<ShortLinkRecord, ShortenerError> {
        let ShortenParams {
            original_url,
            validity,
            custom_code,
        } = params;

        if !is_valid_url(&original_url) {
            return Err(ShortenerError::InvalidUrl(original_url));
        }

        // surrounding whitespace is ignored; a blank code means "generate one"
        let custom_code = custom_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(ShortCode::new)
            .transpose()?;

        let now = self.clock.now();
        let expiry = self.expiry_from(now, validity);

        let record = match custom_code {
            Some(code) => {
                let record = ShortLinkRecord::new(code, original_url, now, expiry);
                self.create_custom(record).await?
            }
            None => self.create_generated(original_url, now, expiry).await?,
        };

        info!(
            code = %record.shortcode,
            url = %record.original_url,
            expiry = %record.expiry,
            "short_url_created"
        );
        Ok(record)
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>, ShortenerError> {
        Ok(self.registry.get(code).await?)
    }
}
