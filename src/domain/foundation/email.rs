//! Email address value object.

use std::fmt;

use super::ValidationError;

/// A structurally valid email address.
///
/// Parsing checks shape only (one `@`, a dotted domain); it makes no
/// claim that the mailbox exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address, rejecting structurally invalid input.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "email",
                "must not contain whitespace",
            ));
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(ValidationError::invalid_format(
                "email",
                "missing '@' separator",
            ));
        };
        if local.is_empty() {
            return Err(ValidationError::invalid_format(
                "email",
                "missing local part before '@'",
            ));
        }
        if domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "malformed domain part",
            ));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(ValidationError::invalid_format(
                "email",
                "domain must contain an inner dot",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
