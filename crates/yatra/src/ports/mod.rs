//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the proxy talks to
//! third-party providers.
//!
//! Implementations of these traits live in the server's adapters.

pub mod services;

// Re-exports
pub use services::*;
