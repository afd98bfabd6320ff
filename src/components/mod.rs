//! UI components built with Leptos.
//!
//! - [`router`] - hash-based routing (main entry point)
//! - [`navbar`] - navigation bar with mobile menu
//! - [`skills`] - skills grid with category filters
//! - [`projects`] - project cards grid
//! - [`project_detail`] - detail page with image slider and modal
//! - [`contact`] - contact form
//! - [`icons`] - centralized icon definitions

pub mod contact;
pub mod icons;
pub mod navbar;
pub mod project_detail;
pub mod projects;
pub mod router;
pub mod skills;

pub use router::AppRouter;
