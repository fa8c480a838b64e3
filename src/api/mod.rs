//! Backend API Client
//!
//! HTTP bindings to the leaderboard REST backend, organized by domain.
//! Every call resolves to `Result<T, String>`; non-success statuses
//! and network failures both surface as the error string.

mod departments;
mod media;
mod results;
mod schedules;
mod session;

use gloo_net::http::Response;

/// Base path for collection endpoints
pub(crate) const API_BASE: &str = "/api";

/// Reject non-success responses so callers only see `Ok` for 2xx.
pub(crate) fn check_status(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()))
    }
}

// Re-export all public items
pub use departments::*;
pub use media::*;
pub use results::*;
pub use schedules::*;
pub use session::*;
