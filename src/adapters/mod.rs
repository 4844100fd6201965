//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to concrete infrastructure:
//! - `events` - Event bus, outbox and relay
//! - `memory` - In-memory repositories and supporting adapters

pub mod events;
pub mod memory;

pub use events::{InMemoryEventBus, InMemoryOutbox, OutboxRelay, OutboxRelayConfig};
pub use memory::{
    FixedClock, InMemoryProjectRepository, InMemoryTeamRepository, OptOutList, SystemClock,
    UuidIdSource,
};
