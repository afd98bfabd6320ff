//! Contact form data and submission lifecycle.

use serde::Serialize;

use crate::core::error::ContactError;

/// JSON body POSTed to the form-relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// State of the contact form's result banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing in flight, banner hidden.
    #[default]
    Idle,
    /// Request in flight.
    Sending,
    /// Relay accepted the message.
    Sent,
    /// Submission failed; terminal, never retried.
    Failed(ContactError),
}

impl SubmitStatus {
    /// Banner text for this state, or `None` when the banner is hidden.
    pub fn banner_text(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Please wait...".to_string()),
            Self::Sent => Some("Your message has been sent!".to_string()),
            Self::Failed(err) => Some(err.to_string()),
        }
    }

    /// Whether the banner should be styled as an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_serializes_to_relay_shape() {
        let body = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["message"], "Hello");
    }

    #[test]
    fn idle_hides_the_banner() {
        assert_eq!(SubmitStatus::Idle.banner_text(), None);
    }

    #[test]
    fn rejection_without_server_message_still_renders_text() {
        let status = SubmitStatus::Failed(ContactError::Rejected(None));
        let text = status.banner_text().unwrap();
        assert!(!text.is_empty());
        assert!(status.is_error());
    }
}
