//! Yatra API Models
//!
//! - Weather: query and error body for current conditions
//! - Chat: guide assistant replies

mod chat;
mod weather;

pub use chat::*;
pub use weather::*;
