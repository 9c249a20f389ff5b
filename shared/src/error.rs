use thiserror::Error;

use crate::{messages, models::ContentKind};

/// Local form validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Every failure the API service and view-models can report.
///
/// All variants are non-fatal: callers show [`ContentError::user_message`]
/// in a dismissible notification and stay interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The request never produced a response (DNS, refused, CORS, offline).
    #[error("server unreachable: {0}")]
    NetworkUnreachable(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(ContentKind),
    /// 2xx response whose envelope carried `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ContentError {
    /// Text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkUnreachable(_) => messages::errors::SERVER_UNREACHABLE.to_string(),
            Self::Http {
                ..
            } => self.to_string(),
            Self::Validation(ValidationError::MissingFields(_)) => {
                messages::errors::VALIDATION_FAILED.to_string()
            },
            Self::Validation(ValidationError::InvalidEmail(_)) => {
                messages::errors::INVALID_EMAIL.to_string()
            },
            Self::NotFound(ContentKind::Blog) => messages::errors::BLOG_NOT_FOUND.to_string(),
            Self::NotFound(ContentKind::Story) => messages::errors::STORY_NOT_FOUND.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Decode(_) => messages::errors::NETWORK.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
            || matches!(
                self,
                Self::Http {
                    status: 404,
                    ..
                }
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status_text() {
        let err = ContentError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.user_message(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn unreachable_server_gets_friendly_message() {
        let err = ContentError::NetworkUnreachable("connection refused".to_string());
        assert_eq!(err.user_message(), messages::errors::SERVER_UNREACHABLE);
    }

    #[test]
    fn not_found_message_depends_on_kind() {
        assert_eq!(
            ContentError::NotFound(ContentKind::Story).user_message(),
            messages::errors::STORY_NOT_FOUND
        );
        assert!(ContentError::Http {
            status: 404,
            status_text: "Not Found".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = ValidationError::MissingFields(vec!["authorName", "blogTitle"]);
        assert_eq!(err.to_string(), "missing required fields: authorName, blogTitle");
    }
}
