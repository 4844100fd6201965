//! Application layer - Services and event handlers.
//!
//! Services orchestrate domain operations against the ports; event handlers
//! react to events from the other context. Nothing here holds state of its
//! own, everything flows through the repositories and the event plumbing.

pub mod handlers;

mod project_service;
mod team_service;

pub use handlers::{CompleteProjectTaskOnTeamTaskCompleted, NotifyContactOnTaskAdded};
pub use project_service::{NewProject, ProjectService};
pub use team_service::TeamService;
