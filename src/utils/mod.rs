//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_json_cached`] - network fetching with timeout
//! - [`cache`] - sessionStorage JSON cache
//! - [`dom`] - safe wrappers over browser APIs
//! - [`format`] - display formatting helpers

pub mod cache;
pub mod dom;
pub mod format;
mod fetch;

pub use fetch::{RaceResult, fetch_json, fetch_json_cached, race_with_timeout};
