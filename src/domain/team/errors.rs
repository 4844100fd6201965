//! Error types for the team context.

use thiserror::Error;

use crate::domain::foundation::{
    EventError, ProjectTaskId, RepositoryError, TeamId, TeamMemberId, TeamTaskId, ValidationError,
};

use super::task_status::TeamTaskStatus;

/// Errors raised by team operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Unknown team: {0}")]
    UnknownTeam(TeamId),

    #[error("Unknown task: {0}")]
    UnknownTask(TeamTaskId),

    #[error("Unknown member: {0}")]
    UnknownMember(TeamMemberId),

    #[error("Member {0} still has assigned tasks")]
    MemberHasAssignedTasks(TeamMemberId),

    #[error("Task {0} can only be deleted while not assigned")]
    TaskCannotBeDeleted(TeamTaskId),

    #[error("Task {task_id} cannot move from {from} to {to}")]
    TransitionNotAllowed {
        task_id: TeamTaskId,
        from: TeamTaskStatus,
        to: TeamTaskStatus,
    },

    #[error("Project task {0} is already assigned to a team")]
    TaskAlreadyAssigned(ProjectTaskId),

    #[error("No project task found for {0}")]
    UnknownProjectTask(ProjectTaskId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Event(#[from] EventError),
}
