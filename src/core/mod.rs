//! Core logic kept independent of the DOM.
//!
//! This module provides:
//! - [`ComponentLoader`] - dependency-ordered async component initialization
//! - [`SliderState`] - slide index state machine for the detail gallery
//! - [`error`] - per-domain error types

pub mod error;
mod loader;
mod slider;

pub use loader::{ComponentLoader, LoadFailure, LoadFuture, LoadReport};
pub use slider::{SliderState, SwipeDirection, resolve_swipe};
