//! Project domain events.
//!
//! Events published when planning changes other contexts care about:
//! - `TaskAddedToProject` - A task was planned within a project

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, ProjectId, ProjectTaskId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// TaskAddedToProject
// ════════════════════════════════════════════════════════════════════════════

/// Published after a task has been added to a project and the project saved.
///
/// Teams use this to learn which project tasks exist; the notification
/// side uses it to tell the project's contact person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAddedToProject {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the project the task was added to.
    pub project_id: ProjectId,

    /// ID of the newly planned task.
    pub task_id: ProjectTaskId,

    /// When the task was added.
    pub occurred_at: Timestamp,
}

domain_event!(
    TaskAddedToProject,
    event_type = "project.task_added.v1",
    schema_version = 1,
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);
