//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which validates creation
//! requests, picks or generates a short code, computes the expiry and
//! stores the record. Core types are re-exported from `linklet_core`.

pub mod service;
pub mod settings;

pub use linklet_core::{ShortenParams, Shortener, ShortenerError, Validity};
pub use service::ShortenerService;
pub use settings::ShortenerSettings;
