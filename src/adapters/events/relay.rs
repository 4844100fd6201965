//! OutboxRelay - Background task for reliable event delivery.
//!
//! Second half of the Transactional Outbox Pattern:
//! 1. Services enqueue events in the outbox alongside the aggregate save
//! 2. **OutboxRelay polls the outbox and dispatches to the event bus** ← This module
//!
//! Failed dispatches stay in the outbox and are retried on the next
//! poll. On shutdown the relay drains one final batch before stopping.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::EventError;
use crate::ports::{EventPublisher, OutboxWriter};

/// Configuration for the relay loop.
#[derive(Debug, Clone)]
pub struct OutboxRelayConfig {
    /// How often to poll for undelivered events.
    pub poll_interval: Duration,

    /// Maximum entries to process per poll cycle.
    pub batch_size: u32,
}

impl Default for OutboxRelayConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            batch_size: 100,
        }
    }
}

impl OutboxRelayConfig {
    /// Config with a custom poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Config with a custom batch size.
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }
}

/// Background task that dispatches outbox entries to the event bus.
pub struct OutboxRelay {
    outbox: Arc<dyn OutboxWriter>,
    dispatcher: Arc<dyn EventPublisher>,
    config: OutboxRelayConfig,
}

impl OutboxRelay {
    /// Creates a relay with default configuration.
    pub fn new(outbox: Arc<dyn OutboxWriter>, dispatcher: Arc<dyn EventPublisher>) -> Self {
        Self {
            outbox,
            dispatcher,
            config: OutboxRelayConfig::default(),
        }
    }

    /// Creates a relay with custom configuration.
    pub fn with_config(
        outbox: Arc<dyn OutboxWriter>,
        dispatcher: Arc<dyn EventPublisher>,
        config: OutboxRelayConfig,
    ) -> Self {
        Self {
            outbox,
            dispatcher,
            config,
        }
    }

    /// Runs the relay loop until the shutdown signal flips to true.
    ///
    /// Returns `Ok(())` on graceful shutdown. Outbox access failures are
    /// fatal; dispatch failures are not, those entries are retried.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), EventError> {
        let mut interval = time::interval(self.config.poll_interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        // Drain one final batch before stopping
                        self.drain_once().await?;
                        return Ok(());
                    }
                }

                _ = interval.tick() => {
                    self.drain_once().await?;
                }
            }
        }
    }

    /// Processes one batch of undelivered entries.
    ///
    /// Returns the number of entries successfully dispatched. Also usable
    /// directly in tests for deterministic delivery.
    pub async fn drain_once(&self) -> Result<usize, EventError> {
        let entries = self.outbox.pending(self.config.batch_size).await?;
        let mut dispatched = 0;

        for entry in entries {
            match self.dispatcher.publish(entry.event.clone()).await {
                Ok(()) => {
                    self.outbox.mark_published(entry.id).await?;
                    dispatched += 1;
                    tracing::debug!(
                        event_id = %entry.event.event_id,
                        event_type = %entry.event.event_type,
                        "Dispatched outbox entry"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        event_id = %entry.event.event_id,
                        event_type = %entry.event.event_type,
                        error = %e,
                        "Failed to dispatch event, entry will be retried"
                    );
                    self.outbox.mark_failed(entry.id, &e.to_string()).await?;
                }
            }
        }

        Ok(dispatched)
    }
}
