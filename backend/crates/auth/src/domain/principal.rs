//! Principal Entity

use kernel::email::Email;
use serde::Serialize;

/// Verified identity derived from a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Subject (`sub` claim) as issued by the identity provider
    pub subject: String,
    /// Email claim, exactly as issued
    pub email: Email,
}

impl Principal {
    pub fn new(subject: impl Into<String>, email: Email) -> Self {
        Self {
            subject: subject.into(),
            email,
        }
    }

    /// True when `email` (as sent by a client) is byte-identical to this
    /// principal's email
    pub fn owns_email(&self, email: &str) -> bool {
        email == self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal::new("uid-1", Email::new("reader@example.com").unwrap())
    }

    #[test]
    fn test_owns_own_email() {
        assert!(principal().owns_email("reader@example.com"));
    }

    #[test]
    fn test_does_not_own_other_email() {
        assert!(!principal().owns_email("other@example.com"));
        assert!(!principal().owns_email("not-an-email"));
    }

    #[test]
    fn test_ownership_is_case_and_space_sensitive() {
        assert!(!principal().owns_email("READER@EXAMPLE.COM"));
        assert!(!principal().owns_email("Reader@Example.com"));
        assert!(!principal().owns_email(" reader@example.com"));
    }
}
