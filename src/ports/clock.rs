//! Clock port - Interface for reading the current time.
//!
//! Timestamps enter the domain through this port only, which keeps
//! time-dependent behavior controllable in tests.

use crate::domain::foundation::Timestamp;

/// Port for obtaining the current time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}
