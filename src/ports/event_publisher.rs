//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the application publishes events without knowing
//! about the underlying transport mechanism (in-memory bus, outbox, ...).

use async_trait::async_trait;

use crate::domain::foundation::{EventEnvelope, EventError};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (handlers may receive duplicates)
/// - Errors are propagated to the caller
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), EventError>;

    /// Publish multiple events in order.
    ///
    /// Delivery is sequential; a failure stops the batch and is returned.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), EventError>;
}
