//! Team repository port (write side).
//!
//! Defines the contract for persisting and retrieving Team aggregates.
//! Versioning follows the same root-aware rules as the project side.

use async_trait::async_trait;

use crate::domain::foundation::{ProjectTaskId, RepositoryError, TeamId};
use crate::domain::team::Team;

/// Repository port for Team aggregate persistence.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist the aggregate and return the stored copy.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the store holds a different version than the one
    ///   this aggregate was loaded at
    /// - `Storage` on persistence failure
    async fn save(&self, team: Team) -> Result<Team, RepositoryError>;

    /// Find a team by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError>;

    /// Find the team that has taken on the given project task.
    ///
    /// Returns `None` when no team claims the task. At most one team ever
    /// claims a project task.
    async fn find_by_original_task_id(
        &self,
        original_task_id: &ProjectTaskId,
    ) -> Result<Option<Team>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn team_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn TeamRepository) {}
    }
}
