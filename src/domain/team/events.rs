//! Domain events emitted by the team context.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ActualSpentTime, EventId, ProjectTaskId, TeamId, TeamTaskId, Timestamp,
};

// ════════════════════════════════════════════════════════════════════════════
// TeamTaskCompleted
// ════════════════════════════════════════════════════════════════════════════

/// Published after a team task reaches its completed status.
///
/// Carries the originating project task id so the project side can mirror
/// the completion without knowing anything about the team aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamTaskCompleted {
    /// Unique identifier of this event instance
    pub event_id: EventId,
    /// Team that finished the task
    pub team_id: TeamId,
    /// Task within the team that was completed
    pub task_id: TeamTaskId,
    /// Project task this team task was taken on for
    pub original_task_id: ProjectTaskId,
    /// Time the team actually spent on the task
    pub actual_spent_time: ActualSpentTime,
    /// When the completion happened
    pub occurred_at: Timestamp,
}

domain_event!(
    TeamTaskCompleted,
    event_type = "team.task_completed.v1",
    schema_version = 1,
    aggregate_id = team_id,
    aggregate_type = "Team",
    occurred_at = occurred_at,
    event_id = event_id
);
