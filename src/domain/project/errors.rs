//! Errors raised by the project planning context.

use thiserror::Error;

use crate::domain::foundation::{
    EventError, ProjectId, ProjectTaskId, RepositoryError, TimeEstimation, ValidationError,
};

/// Errors from project operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),

    #[error("Unknown project task: {0}")]
    UnknownTask(ProjectTaskId),

    #[error("Project {0} is already completed")]
    AlreadyCompleted(ProjectId),

    #[error("Task estimations of {requested} would exceed the initial estimation of {limit}")]
    EstimationExceeded {
        limit: TimeEstimation,
        requested: TimeEstimation,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Event(#[from] EventError),
}
