//! OAuth2 service for the Pinterest API.
//!
//! Authorization-code grant: build the consent URL, exchange the callback
//! code for tokens, and refresh an expiring token.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
