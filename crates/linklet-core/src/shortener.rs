use crate::error::ShortenerError;
use crate::record::ShortLinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::SignedDuration;

type Result<T> = std::result::Result<T, ShortenerError>;

/// How long a new short link stays active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Validity {
    /// Use the service's configured default.
    #[default]
    Default,
    /// A positive, finite number of minutes. Fractions are allowed.
    Minutes(f64),
}

impl Validity {
    /// Builds a validity from a requested number of minutes.
    ///
    /// Anything that is not a positive finite number falls back to
    /// [`Validity::Default`] instead of being rejected.
    pub fn from_minutes(minutes: f64) -> Self {
        if minutes.is_finite() && minutes > 0.0 {
            Self::Minutes(minutes)
        } else {
            Self::Default
        }
    }

    /// Resolves to a duration at millisecond resolution.
    ///
    /// Returns `None` for [`Validity::Default`] or when the requested length
    /// cannot be represented.
    pub fn to_duration(self) -> Option<SignedDuration> {
        match self {
            Validity::Default => None,
            Validity::Minutes(minutes) => {
                let millis = (minutes * 60_000.0).round();
                if !millis.is_finite() || millis < 1.0 || millis > i64::MAX as f64 {
                    return None;
                }
                Some(SignedDuration::from_millis(millis as i64))
            }
        }
    }
}

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub original_url: String,
    pub validity: Validity,
    /// Optional user-chosen short code, not yet validated.
    pub custom_code: Option<String>,
}

impl ShortenParams {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            validity: Validity::Default,
            custom_code: None,
        }
    }

    pub fn with_validity(mut self, validity: Validity) -> Self {
        self.validity = validity;
        self
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a shortened URL and returns the stored record.
    async fn shorten(&self, params: ShortenParams) -> Result<ShortLinkRecord>;

    /// Looks up a record, expired or not, for analytics.
    /// Returns `None` if the code does not exist.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>>;
}
