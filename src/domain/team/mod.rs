//! Team execution context.
//!
//! Teams staff members and take on project tasks for execution. A team
//! task references the project task it was taken on for, and completion
//! is reported back to the project context through an event.
//!
//! # Events
//!
//! - `TeamTaskCompleted` - Published when a team task finishes

mod aggregate;
mod errors;
mod events;
mod task_status;

pub use aggregate::{Team, TeamMember, TeamTask};
pub use errors::TeamError;
pub use events::TeamTaskCompleted;
pub use task_status::TeamTaskStatus;
