//! Status enums for projects and their planned tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project.
///
/// The stored status mirrors the computed completion state: a project is
/// completed exactly when it has at least one task and every task is
/// complete. There is no way back from `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planned,
    Completed,
}

impl ProjectStatus {
    /// Returns true while the project still accepts task changes.
    pub fn is_open(&self) -> bool {
        matches!(self, ProjectStatus::Planned)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// Completion status of a single planned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTaskStatus {
    #[default]
    Incomplete,
    Complete,
}

impl ProjectTaskStatus {
    /// Returns true once the task is complete.
    pub fn is_complete(&self) -> bool {
        matches!(self, ProjectTaskStatus::Complete)
    }
}

impl fmt::Display for ProjectTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectTaskStatus::Incomplete => "Incomplete",
            ProjectTaskStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_status_is_planned() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planned);
    }

    #[test]
    fn planned_is_open_completed_is_not() {
        assert!(ProjectStatus::Planned.is_open());
        assert!(!ProjectStatus::Completed.is_open());
    }

    #[test]
    fn project_status_serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Planned).unwrap(),
            "\"planned\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn default_task_status_is_incomplete() {
        assert_eq!(ProjectTaskStatus::default(), ProjectTaskStatus::Incomplete);
    }

    #[test]
    fn is_complete_works_correctly() {
        assert!(!ProjectTaskStatus::Incomplete.is_complete());
        assert!(ProjectTaskStatus::Complete.is_complete());
    }

    #[test]
    fn task_status_deserializes_from_snake_case_json() {
        let status: ProjectTaskStatus = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(status, ProjectTaskStatus::Complete);
    }

    #[test]
    fn statuses_display_readably() {
        assert_eq!(format!("{}", ProjectStatus::Planned), "Planned");
        assert_eq!(format!("{}", ProjectTaskStatus::Complete), "Complete");
    }
}
