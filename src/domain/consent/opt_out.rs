//! EmailOptOut value object.

use crate::domain::foundation::{EmailAddress, Timestamp};

/// A recorded decision by a contact to receive no notification mail.
///
/// Opt-outs are append-only records; notification policy checks them
/// before any mail goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailOptOut {
    email: EmailAddress,
    opted_out_at: Timestamp,
}

impl EmailOptOut {
    /// Record an opt-out for the given address.
    pub fn new(email: EmailAddress, opted_out_at: Timestamp) -> Self {
        Self {
            email,
            opted_out_at,
        }
    }

    /// Returns the opted-out address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns when the opt-out was recorded.
    pub fn opted_out_at(&self) -> Timestamp {
        self.opted_out_at
    }
}
