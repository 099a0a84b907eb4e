//! Contact-form email syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Live validation state of the contact form's email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidity {
    Empty,
    Valid,
    Invalid,
}

impl EmailValidity {
    /// Whether the `valid` class should be present.
    #[must_use]
    pub const fn marks_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether the `invalid` class should be present.
    #[must_use]
    pub const fn marks_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

#[must_use]
pub fn validate_email(value: &str) -> EmailValidity {
    if value.is_empty() {
        return EmailValidity::Empty;
    }
    let matched = EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value));
    if matched {
        EmailValidity::Valid
    } else {
        EmailValidity::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_addresses() {
        assert_eq!(validate_email("user@example.com"), EmailValidity::Valid);
        assert_eq!(validate_email("first.last@sub.example.co"), EmailValidity::Valid);
        assert_eq!(validate_email("user@"), EmailValidity::Invalid);
        assert_eq!(validate_email("user@example"), EmailValidity::Invalid);
        assert_eq!(validate_email("us er@example.com"), EmailValidity::Invalid);
        assert_eq!(validate_email("a@b@c.com"), EmailValidity::Invalid);
        assert_eq!(validate_email(""), EmailValidity::Empty);
    }

    #[test]
    fn empty_marks_neither_class() {
        let empty = validate_email("");
        assert!(!empty.marks_valid());
        assert!(!empty.marks_invalid());
        assert!(validate_email("user@example.com").marks_valid());
        assert!(validate_email("user@").marks_invalid());
    }
}
