//! Registry backends for Linklet.
//!
//! Only an in-memory backend exists: records live for the lifetime of the
//! process and are never evicted.

pub mod memory;

pub use linklet_core::error::{Result, StorageError};
pub use linklet_core::{ReadRegistry, Registry};
pub use memory::InMemoryRegistry;
