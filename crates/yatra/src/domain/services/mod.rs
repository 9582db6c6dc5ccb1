//! Domain Services
//!
//! Pure logic shared by the proxy and its clients.

mod demo;
mod fallback;

pub use demo::*;
pub use fallback::*;
