//! Core types and traits for the Linklet URL shortener.
//!
//! This crate provides shared types and traits used by the shortener,
//! redirector and gateway crates: the validated [`ShortCode`], the
//! [`ShortLinkRecord`] stored per code, the registry traits every storage
//! backend implements, and the small capabilities (clock, geo lookup)
//! injected into the services.

pub mod clock;
pub mod error;
pub mod geo;
pub mod record;
pub mod registry;
pub mod shortcode;
pub mod shortener;
pub mod time;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, ShortenerError, StorageError};
pub use geo::{GeoResolver, UNKNOWN_COUNTRY};
pub use record::{ClickEvent, ShortLinkRecord};
pub use registry::{ReadRegistry, Registry};
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, Shortener, Validity};
pub use validation::is_valid_url;
