//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event infrastructure and error
//! types that form the vocabulary of both work-tracking contexts.

mod contact;
mod email;
mod errors;
mod events;
mod ids;
mod root_aware;
mod state_machine;
mod time;
mod timestamp;

pub use contact::ContactPerson;
pub use email::EmailAddress;
pub use errors::{EventError, RepositoryError, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ProjectId, ProjectTaskId, TeamId, TeamMemberId, TeamTaskId};
pub use root_aware::{
    apply_child_flushes, AggregateRoot, ChildFlush, ChildMutation, RootAware, Version,
};
pub use state_machine::StateMachine;
pub use time::{ActualSpentTime, TimeEstimation};
pub use timestamp::Timestamp;
