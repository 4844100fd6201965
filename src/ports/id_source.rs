//! IdSource port - Interface for minting aggregate and child ids.
//!
//! Services generate ids up front, before touching any store, so the id
//! of a new aggregate or child is known to the caller even when the save
//! later fails. Keeping generation behind a port makes workflows
//! deterministic under test.

use crate::domain::foundation::{ProjectId, ProjectTaskId, TeamId, TeamMemberId, TeamTaskId};

/// Port for generating fresh identifiers.
pub trait IdSource: Send + Sync {
    /// Mint an id for a new project.
    fn next_project_id(&self) -> ProjectId;

    /// Mint an id for a new project task.
    fn next_project_task_id(&self) -> ProjectTaskId;

    /// Mint an id for a new team.
    fn next_team_id(&self) -> TeamId;

    /// Mint an id for a new team task.
    fn next_team_task_id(&self) -> TeamTaskId;

    /// Mint an id for a new team member.
    fn next_team_member_id(&self) -> TeamMemberId;
}
