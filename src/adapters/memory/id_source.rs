//! UUID-backed id source.

use crate::domain::foundation::{ProjectId, ProjectTaskId, TeamId, TeamMemberId, TeamTaskId};
use crate::ports::IdSource;

/// Mints random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl UuidIdSource {
    /// Creates a new id source.
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for UuidIdSource {
    fn next_project_id(&self) -> ProjectId {
        ProjectId::new()
    }

    fn next_project_task_id(&self) -> ProjectTaskId {
        ProjectTaskId::new()
    }

    fn next_team_id(&self) -> TeamId {
        TeamId::new()
    }

    fn next_team_task_id(&self) -> TeamTaskId {
        TeamTaskId::new()
    }

    fn next_team_member_id(&self) -> TeamMemberId {
        TeamMemberId::new()
    }
}
