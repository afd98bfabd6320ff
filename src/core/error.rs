//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`LoadError`] - Component initialization failures
//! - [`RegistrationError`] - Invalid component registrations
//! - [`ContactError`] - Contact form submission failures

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors produced by a component's load function.
///
/// A missing mount element is deliberately not an error: components no-op
/// with a logged warning when their section is absent from the page.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Underlying data fetch failed.
    Fetch(FetchError),
    /// Free-form failure message.
    Message(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{}", err),
            Self::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

/// Errors rejected at component registration time.
///
/// The loader validates the dependency graph as it grows instead of
/// discovering duplicates or cycles during `load_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A component with this name is already registered.
    DuplicateName(String),
    /// The new component's dependencies close a cycle.
    CyclicDependency(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "component '{}' is already registered", name)
            }
            Self::CyclicDependency(name) => {
                write!(f, "registering '{}' would create a dependency cycle", name)
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Contact form submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Request never reached the relay (connection failure, timeout).
    Network,
    /// The relay answered with a non-200 status. Carries the `message`
    /// field of the response body when present.
    Rejected(Option<String>),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(
                f,
                "An error occurred, please check your internet connection."
            ),
            Self::Rejected(Some(msg)) => write!(f, "{}", msg),
            Self::Rejected(None) => write!(f, "Message could not be sent, please try again."),
        }
    }
}

impl std::error::Error for ContactError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_without_message_has_generic_text() {
        // A relay error body without a `message` field must never surface
        // an empty or "undefined" string to the user.
        let err = ContactError::Rejected(None);
        let text = err.to_string();
        assert!(!text.is_empty());
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn rejected_with_message_uses_it() {
        let err = ContactError::Rejected(Some("Invalid access key".to_string()));
        assert_eq!(err.to_string(), "Invalid access key");
    }
}
