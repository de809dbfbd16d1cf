//! capdigest core library
//!
//! Uniform, runtime-checked access to digest algorithms. An implementation
//! handle is asked whether it exposes a capability; if it does, the caller
//! receives an operation table bound to the handle and calls through it.
//! Capabilities and implementations carry stable numeric tags for dispatch,
//! serialization and diagnostics.

pub mod algorithms;
pub mod buffer;
pub mod capability;
pub mod config;
pub mod error;
pub mod registry;
pub mod tag;

// Re-export main types
pub use buffer::Buffer;
pub use capability::{Api, ApiTable, Capability, Impl};
pub use config::{ConfigLoader, CoreConfig, RegistryConfig};
pub use error::{Error, Result};
pub use registry::AlgorithmRegistry;
pub use tag::{ApiTag, ExternalId, ImplTag};
