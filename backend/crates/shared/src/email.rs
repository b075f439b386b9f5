//! Email Value Object
//!
//! Email addresses identify users. They come from verified tokens and are
//! compared byte for byte against the addresses clients send, so the value
//! is kept exactly as issued; only its shape is checked.

use crate::error::app_error::{AppError, AppResult};
use serde::Serialize;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object (validated, stored verbatim)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || domain.contains('@') {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("reader@example.com").is_ok());
        assert!(Email::new("reader.name@example.co.jp").is_ok());
        assert!(Email::new("reader+blog@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new(" reader@example.com").is_err());
        assert!(Email::new("readerexample.com").is_err());
        assert!(Email::new("reader@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("reader@@example.com").is_err());
        assert!(Email::new("reader@example").is_err());
        assert!(Email::new("reader@.example.com").is_err());
    }

    #[test]
    fn test_email_kept_verbatim() {
        let email = Email::new("Reader@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Reader@Example.COM");
        assert_ne!(email, Email::new("reader@example.com").unwrap());
    }
}
