//! In-memory transactional outbox.
//!
//! Stores enqueued events until the relay dispatches them. The outbox
//! also implements [`EventPublisher`], so services wired against the
//! publisher port write to the outbox without knowing it; the relay does
//! the actual delivery.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{EventEnvelope, EventError};
use crate::ports::{EventPublisher, OutboxEntry, OutboxStatus, OutboxWriter};

/// Vec-backed implementation of [`OutboxWriter`].
pub struct InMemoryOutbox {
    entries: RwLock<Vec<OutboxEntry>>,
}

impl InMemoryOutbox {
    /// Creates an empty outbox.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Number of entries still awaiting delivery.
    pub async fn pending_count(&self) -> usize {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|entry| entry.status != OutboxStatus::Published)
            .count()
    }

    /// Number of successfully published entries.
    pub async fn published_count(&self) -> usize {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|entry| entry.status == OutboxStatus::Published)
            .count()
    }
}

impl Default for InMemoryOutbox {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutboxWriter for InMemoryOutbox {
    async fn enqueue(&self, event: EventEnvelope) -> Result<OutboxEntry, EventError> {
        let entry = OutboxEntry::new(event);
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn pending(&self, limit: u32) -> Result<Vec<OutboxEntry>, EventError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|entry| entry.status != OutboxStatus::Published)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn mark_published(&self, id: Uuid) -> Result<(), EventError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EventError::delivery(format!("Unknown outbox entry: {}", id)))?;
        entry.mark_published();
        Ok(())
    }

    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), EventError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EventError::delivery(format!("Unknown outbox entry: {}", id)))?;
        entry.mark_failed(error);
        Ok(())
    }
}

#[async_trait]
impl EventPublisher for InMemoryOutbox {
    async fn publish(&self, event: EventEnvelope) -> Result<(), EventError> {
        self.enqueue(event).await?;
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), EventError> {
        for event in events {
            self.enqueue(event).await?;
        }
        Ok(())
    }
}
