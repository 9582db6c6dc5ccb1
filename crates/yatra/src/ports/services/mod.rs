//! Service Ports
//!
//! Abstract interfaces for upstream providers.

mod llm_provider;
mod weather_provider;

pub use llm_provider::*;
pub use weather_provider::*;
