//! In-memory opt-out list.
//!
//! Backs the notification policy port with the recorded email opt-outs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::consent::EmailOptOut;
use crate::domain::foundation::{EmailAddress, Timestamp};
use crate::ports::NotificationPolicy;

/// List-backed store of recorded opt-outs.
pub struct OptOutList {
    entries: RwLock<Vec<EmailOptOut>>,
}

impl OptOutList {
    /// Creates an empty opt-out list.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Records an opt-out for the address. Recording twice keeps the
    /// first entry.
    pub async fn opt_out(&self, email: EmailAddress, at: Timestamp) {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|entry| entry.email() == &email) {
            return;
        }
        entries.push(EmailOptOut::new(email, at));
    }

    /// True when an opt-out is recorded for the address.
    pub async fn contains(&self, email: &EmailAddress) -> bool {
        let entries = self.entries.read().await;
        entries.iter().any(|entry| entry.email() == email)
    }

    /// Number of recorded opt-outs.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for OptOutList {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPolicy for OptOutList {
    async fn is_notification_allowed(&self, email: &EmailAddress) -> bool {
        !self.contains(email).await
    }
}
