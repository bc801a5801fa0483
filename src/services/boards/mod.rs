//! Boards service for the Pinterest API.
//!
//! List, create, update and delete boards and board sections, and list the
//! pins they hold.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
