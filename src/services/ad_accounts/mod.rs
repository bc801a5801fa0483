//! Ad accounts service for the Pinterest API.
//!
//! List ad accounts and their campaigns, ad groups and ads, and pull
//! analytics reports for each entity level.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
