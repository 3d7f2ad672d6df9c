use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Name must be at most {} characters", NAME_MAX)]
    NameTooLong,
    #[error("That doesn't look like an email address")]
    InvalidEmail,
    #[error("Message must be between {} and {} characters", MESSAGE_MIN, MESSAGE_MAX)]
    MessageLength,
    #[error("Message rejected")]
    Spam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims and checks a submission. `honeypot` is a field hidden from people; anything in
    /// it came from a bot.
    pub fn validate(
        name: &str,
        email: &str,
        message: &str,
        honeypot: &str,
    ) -> Result<Self, ContactError> {
        if !honeypot.trim().is_empty() {
            return Err(ContactError::Spam);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > NAME_MAX {
            return Err(ContactError::NameTooLong);
        }
        let email = email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = message.trim();
        let len = message.chars().count();
        if !(MESSAGE_MIN..=MESSAGE_MAX).contains(&len) {
            return Err(ContactError::MessageLength);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "Would love to chat about a project.";

    #[test]
    fn test_valid_submission_is_trimmed() {
        let msg = ContactMessage::validate("  Ada ", " ada@example.com ", MSG, "").unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, MSG);
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            ContactMessage::validate("  ", "ada@example.com", MSG, ""),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            ContactMessage::validate(&"x".repeat(NAME_MAX + 1), "ada@example.com", MSG, ""),
            Err(ContactError::NameTooLong)
        );
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            assert_eq!(
                ContactMessage::validate("Ada", email, MSG, ""),
                Err(ContactError::InvalidEmail),
                "{email}"
            );
        }
        assert_eq!(
            ContactMessage::validate("Ada", "ada@example.com", "hi", ""),
            Err(ContactError::MessageLength)
        );
        assert_eq!(
            ContactMessage::validate("Ada", "ada@example.com", &"x".repeat(MESSAGE_MAX + 1), ""),
            Err(ContactError::MessageLength)
        );
    }

    #[test]
    fn test_honeypot() {
        assert_eq!(
            ContactMessage::validate("Ada", "ada@example.com", MSG, "http://spam"),
            Err(ContactError::Spam)
        );
    }
}
