use crate::Generator;
use linklet_core::ShortCode;
use rand::Rng;

/// Digits, then lowercase, then uppercase ASCII letters.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_LENGTH: usize = 7;

/// Random short code generator.
///
/// Each character is drawn uniformly from [`ALPHABET`] with the thread-local
/// RNG, giving 62^7 (about 3.5e12) possible codes at the default length.
/// The generator holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }

    /// Creates a generator producing codes of `length` characters.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn with_length(length: usize) -> Self {
        assert!(length > 0, "short code length must be positive");
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let code = self.random_code(&mut rand::thread_rng());
        ShortCode::new_unchecked(code)
    }
}
