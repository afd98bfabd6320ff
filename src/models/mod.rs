//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Skill`], [`SkillsDocument`], [`SkillFilter`] - skills grid data
//! - [`Project`], [`ProjectsDocument`], [`Tag`] - project cards and detail pages
//! - [`ContactSubmission`], [`SubmitStatus`] - contact form lifecycle
//! - [`Remote`] - uniform fetched-data state
//! - [`Route`] - hash-based navigation

mod contact;
mod project;
mod remote;
mod route;
mod skill;

pub use contact::{ContactSubmission, SubmitStatus};
pub use project::{Project, ProjectsDocument, Tag};
pub use remote::Remote;
pub use route::Route;
pub use skill::{Skill, SkillFilter, SkillsDocument, category_counts};
