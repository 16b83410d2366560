use jiff::SignedDuration;
use typed_builder::TypedBuilder;

pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Tunables of the [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Validity applied when a request gives none, or an unusable one.
    #[builder(default = DEFAULT_VALIDITY_MINUTES)]
    pub default_validity_minutes: u32,
    /// How many generated candidates may collide before giving up.
    #[builder(default = DEFAULT_MAX_GENERATION_ATTEMPTS)]
    pub max_generation_attempts: u32,
    /// Codes that must never be handed out, e.g. names taken by HTTP routes.
    #[builder(default)]
    pub reserved_codes: Vec<String>,
}

impl ShortenerSettings {
    pub fn default_validity(&self) -> SignedDuration {
        SignedDuration::from_mins(i64::from(self.default_validity_minutes))
    }

    pub fn with_reserved_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_codes.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn is_reserved(&self, code: &str) -> bool {
        self.reserved_codes.iter().any(|reserved| reserved == code)
    }
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
