//! Catalogs service for the Pinterest API.
//!
//! Manage catalog feeds, inspect their processing results, run item batches
//! and maintain product groups.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
