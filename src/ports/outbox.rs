//! Outbox port - Interface for transactional event persistence.
//!
//! Implements the Transactional Outbox Pattern: domain events are stored
//! alongside the aggregate change and published afterwards by a relay,
//! so no event is lost when publishing fails.
//!
//! ## Pattern Overview
//!
//! 1. Service saves the aggregate and enqueues its events in the outbox
//! 2. OutboxRelay (background task) reads pending entries
//! 3. OutboxRelay dispatches to the event bus and marks entries published
//! 4. Handlers receive events through EventSubscriber

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{EventEnvelope, EventError, Timestamp};

/// Status of an outbox entry in the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutboxStatus {
    /// Event written but not yet published
    Pending,
    /// Event successfully published to the bus
    Published,
    /// Event failed to publish (will be retried)
    Failed,
}

/// An entry in the event outbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// Unique identifier for this outbox entry
    pub id: Uuid,

    /// The domain event envelope
    pub event: EventEnvelope,

    /// Current delivery status
    pub status: OutboxStatus,

    /// When the event was written to the outbox
    pub enqueued_at: Timestamp,

    /// When the event was last processed (published or failed)
    pub processed_at: Option<Timestamp>,

    /// Number of publish attempts
    pub attempts: u32,

    /// Last error message if failed
    pub last_error: Option<String>,
}

impl OutboxEntry {
    /// Create a new pending outbox entry for an event.
    pub fn new(event: EventEnvelope) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            status: OutboxStatus::Pending,
            enqueued_at: Timestamp::now(),
            processed_at: None,
            attempts: 0,
            last_error: None,
        }
    }

    /// Mark the entry as successfully published.
    pub fn mark_published(&mut self) {
        self.status = OutboxStatus::Published;
        self.processed_at = Some(Timestamp::now());
        self.attempts += 1;
    }

    /// Mark the entry as failed with an error.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = OutboxStatus::Failed;
        self.processed_at = Some(Timestamp::now());
        self.attempts += 1;
        self.last_error = Some(error.into());
    }
}

/// Port for writing events to the transactional outbox.
///
/// `enqueue` is the write side used by services; the remaining methods
/// belong to the relay's read-and-acknowledge loop.
#[async_trait]
pub trait OutboxWriter: Send + Sync {
    /// Write a single event to the outbox.
    async fn enqueue(&self, event: EventEnvelope) -> Result<OutboxEntry, EventError>;

    /// Get pending and failed entries for processing, oldest first.
    ///
    /// Limit controls batch size; failed entries reappear here so the
    /// relay retries them.
    async fn pending(&self, limit: u32) -> Result<Vec<OutboxEntry>, EventError>;

    /// Mark an entry as successfully published.
    async fn mark_published(&self, id: Uuid) -> Result<(), EventError>;

    /// Mark an entry as failed.
    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), EventError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbox_entry_marks_published() {
        let event = EventEnvelope::test_fixture();
        let mut entry = OutboxEntry::new(event);

        assert_eq!(entry.status, OutboxStatus::Pending);
        assert_eq!(entry.attempts, 0);

        entry.mark_published();

        assert_eq!(entry.status, OutboxStatus::Published);
        assert_eq!(entry.attempts, 1);
        assert!(entry.processed_at.is_some());
    }

    #[test]
    fn outbox_entry_marks_failed() {
        let event = EventEnvelope::test_fixture();
        let mut entry = OutboxEntry::new(event);

        entry.mark_failed("Connection timeout");

        assert_eq!(entry.status, OutboxStatus::Failed);
        assert_eq!(entry.attempts, 1);
        assert_eq!(entry.last_error, Some("Connection timeout".to_string()));
    }

    // Trait object safety test
    #[test]
    fn outbox_writer_is_object_safe() {
        fn _accepts_dyn(_writer: &dyn OutboxWriter) {}
    }
}
