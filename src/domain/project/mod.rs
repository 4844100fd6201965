//! Project planning context.
//!
//! Projects plan work as time-estimated tasks under one total budget.
//! Task reads leave the aggregate only as snapshots; execution happens
//! in the team context against those snapshots.
//!
//! # Events
//!
//! - `TaskAddedToProject` - Published when a task is planned

mod aggregate;
mod errors;
mod events;
mod status;

pub use aggregate::{Project, ProjectTaskSnapshot};
pub use errors::ProjectError;
pub use events::TaskAddedToProject;
pub use status::{ProjectStatus, ProjectTaskStatus};
