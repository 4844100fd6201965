//! NotificationPolicy port - Interface for consent checks before mail.
//!
//! Notification handlers ask this port whether a contact address may be
//! mailed at all. The in-memory adapter backs it with the recorded
//! opt-out list.

use async_trait::async_trait;

use crate::domain::foundation::EmailAddress;

/// Port for deciding whether a contact may be notified.
#[async_trait]
pub trait NotificationPolicy: Send + Sync {
    /// True when no opt-out is recorded for the address.
    async fn is_notification_allowed(&self, email: &EmailAddress) -> bool;
}
