//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title used as the document-title suffix.
pub const APP_NAME: &str = "Portfolio";

// =============================================================================
// Data Sources
// =============================================================================

/// Skills data document, relative to the site root.
pub const SKILLS_DATA_URL: &str = "data/skills.json";

/// Projects data document, relative to the site root.
pub const PROJECTS_DATA_URL: &str = "data/projects.json";

/// Fallback logo shown when a skill's logo image fails to load.
pub const PLACEHOLDER_LOGO: &str = "assets/logos/placeholder.svg";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Form-relay endpoint for contact submissions.
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Session cache keys for fetched documents.
pub mod cache {
    /// sessionStorage key for the skills document.
    pub const SKILLS_KEY: &str = "skills_cache";
    /// sessionStorage key for the projects document.
    pub const PROJECTS_KEY: &str = "projects_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Scroll depth (px) past which the navbar gains its shadow.
pub const NAV_SCROLL_SHADOW_PX: f64 = 50.0;

/// How far (px) above the viewport top a section may sit and still count
/// as the active nav section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// Background alpha for colored tag chips.
pub const TAG_BG_ALPHA: f64 = 0.2;

/// How long the contact result banner stays visible (ms).
pub const RESULT_BANNER_HIDE_MS: u32 = 5000;

/// How long the floating init-error panel stays before auto-dismissing (ms).
pub const INIT_ERROR_DISMISS_MS: u32 = 10000;
