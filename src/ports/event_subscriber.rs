//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! This port defines how handlers register interest in domain events
//! without knowing about the underlying transport mechanism.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{EventEnvelope, EventError};

/// Handler for processing domain events.
///
/// Implementations should be:
/// - **Idempotent** - Safe to call multiple times with same event
/// - **Quick** - Long operations should be queued for async processing
/// - **Isolated** - Errors don't affect other handlers
///
/// # Example
///
/// ```ignore
/// struct ProjectTaskCompleter { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for ProjectTaskCompleter {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), EventError> {
///         let payload: TeamTaskCompleted = event.payload_as()
///             .map_err(|e| EventError::decode(&event.event_type, e))?;
///         // Mirror the completion on the project side...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "ProjectTaskCompleter"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    ///
    /// This method should be idempotent - redelivery with the same event
    /// must produce the same result.
    async fn handle(&self, event: EventEnvelope) -> Result<(), EventError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// Handlers register interest in specific event types and are invoked
/// when matching events are published.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    ///
    /// The handler will be invoked for every event matching the given type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe handler to multiple event types.
    ///
    /// The same handler instance is invoked for any matching event type.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
///
/// An EventBus provides both publishing and subscribing capabilities.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

// Blanket implementation - any type that implements both traits is an EventBus
impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
