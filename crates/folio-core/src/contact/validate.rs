use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Address shape accepted by browser `type="email"` inputs
const EMAIL_PATTERN: &str = r##"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"##;

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

pub fn is_valid_email(address: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(address))
}

/// One of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name...",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Hello, I'd like to talk about...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }

    pub fn index(&self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Message => 2,
        }
    }

    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in your {0}")]
    Empty(FormField),

    #[error("Please enter a valid email address")]
    MalformedEmail,
}

impl ValidationError {
    /// The input the user needs to fix
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Empty(field) => *field,
            ValidationError::MalformedEmail => FormField::Email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        for address in ["asha@example.com", "a.b+tag@mail.example.co.in", "x@localhost"] {
            assert!(is_valid_email(address), "{}", address);
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for address in ["", "asha", "asha@", "@example.com", "asha@@example.com", "asha @example.com", "asha@-example.com"] {
            assert!(!is_valid_email(address), "{}", address);
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::MalformedEmail.field(), FormField::Email);
        assert_eq!(ValidationError::Empty(FormField::Message).to_string(), "Please fill in your message");
    }
}
