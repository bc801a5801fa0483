//! Tests for the Pinterest API client.

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod oauth_tests;

#[cfg(test)]
mod services_tests;
