use crate::Generator;
use linklet_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// Deterministic short code generator built on a counter.
///
/// Produces codes like "seq0000", "seq0001", ... . Useful wherever a
/// predictable sequence is needed, e.g. to force collisions against codes
/// that are already registered.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
    width: usize,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
            width: self.width,
        }
    }
}

impl SeqGenerator {
    /// Creates a generator with a custom prefix and four counter digits.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
            width: 4,
        }
    }

    /// Sets how many digits the counter is padded to.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        let code = format!("{}{:0width$}", self.prefix, count, width = self.width);
        ShortCode::new_unchecked(code)
    }
}
