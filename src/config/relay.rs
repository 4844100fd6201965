//! Outbox relay configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Outbox relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Delay between outbox polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum number of entries dispatched per poll
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl RelayConfig {
    /// Get the poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate relay configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.poll_interval_ms == 0 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.batch_size == 0 || self.batch_size > 1000 {
            return Err(ValidationError::BatchSizeOutOfRange);
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_batch_size() -> u32 {
    100
}
