//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ProjectRepository` - Project aggregate persistence
//! - `TeamRepository` - Team aggregate persistence
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//! - `OutboxWriter` - Transactional event persistence for guaranteed delivery
//!
//! ## Supporting Ports
//!
//! - `IdSource` - Identifier generation
//! - `Clock` - Current time
//! - `NotificationPolicy` - Consent check before notification mail

mod clock;
mod event_publisher;
mod event_subscriber;
mod id_source;
mod notification;
mod outbox;
mod project_repository;
mod team_repository;

pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use id_source::IdSource;
pub use notification::NotificationPolicy;
pub use outbox::{OutboxEntry, OutboxStatus, OutboxWriter};
pub use project_repository::ProjectRepository;
pub use team_repository::TeamRepository;
