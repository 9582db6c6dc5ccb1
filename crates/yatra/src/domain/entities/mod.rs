//! Domain Entities
//!
//! Transient request/response values. Nothing here is persisted or mutated
//! after construction.
//! - Location: a point on the map
//! - WeatherReport: current conditions at a location
//! - ChatExchange: one question and its answer

mod chat;
mod location;
mod weather;

pub use chat::*;
pub use location::*;
pub use weather::*;
