//! Contact person value object.

use super::ValidationError;

/// The person to reach about a project.
///
/// The email is stored as entered. Whether it parses as a usable address
/// is decided at notification time, not at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPerson {
    name: String,
    email: String,
}

impl ContactPerson {
    /// Creates a contact person with a non-empty name.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("contact_name"));
        }
        Ok(Self {
            name,
            email: email.into(),
        })
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email exactly as captured, valid or not.
    pub fn email(&self) -> &str {
        &self.email
    }
}
