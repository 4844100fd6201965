//! Event handlers wiring the bounded contexts together.
//!
//! Each handler consumes one event type and applies its effect on the
//! subscribing side. Handlers run behind the event bus, so the publishing
//! context never waits on them.

mod complete_project_task;
mod notify_contact;

pub use complete_project_task::CompleteProjectTaskOnTeamTaskCompleted;
pub use notify_contact::NotifyContactOnTaskAdded;
