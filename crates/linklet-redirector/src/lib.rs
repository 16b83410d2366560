//! Redirect service library.
//!
//! This crate provides a [`RedirectorService`] that resolves a short code to
//! its original URL, refuses expired links, and records a click enriched
//! with the requester's country for every redirect it serves.

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::{ClickContext, Redirector};
pub use service::RedirectorService;
