//! TeamTaskStatus enum for the execution lifecycle of a team task.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Execution status of a task a team has taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamTaskStatus {
    #[default]
    NotAssigned,
    Assigned,
    InProgress,
    Completed,
}

impl TeamTaskStatus {
    /// Returns true while the task can still be removed from the team.
    pub fn is_deletable(&self) -> bool {
        matches!(self, TeamTaskStatus::NotAssigned)
    }
}

impl StateMachine for TeamTaskStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TeamTaskStatus::*;
        matches!(
            (self, target),
            // Assignment picks the task up
            (NotAssigned, Assigned) |
            // Assigned work either starts or is handed back
            (Assigned, InProgress) |
            (Assigned, NotAssigned) |
            // Started work can only finish
            (InProgress, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TeamTaskStatus::*;
        match self {
            NotAssigned => vec![Assigned],
            Assigned => vec![InProgress, NotAssigned],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for TeamTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamTaskStatus::NotAssigned => "Not Assigned",
            TeamTaskStatus::Assigned => "Assigned",
            TeamTaskStatus::InProgress => "In Progress",
            TeamTaskStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
