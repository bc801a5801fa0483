//! Pins service for the Pinterest API.
//!
//! Create, fetch, save and delete pins, and pull pin analytics.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
