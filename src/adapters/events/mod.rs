//! Event delivery adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `InMemoryOutbox` - Transactional outbox store
//! - `OutboxRelay` - Background task that moves outbox entries to the bus

mod in_memory;
mod outbox;
mod relay;

pub use in_memory::InMemoryEventBus;
pub use outbox::InMemoryOutbox;
pub use relay::{OutboxRelay, OutboxRelayConfig};
