//! In-memory team repository.
//!
//! Map-backed team persistence with the same optimistic-lock semantics
//! as the project side.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{apply_child_flushes, ProjectTaskId, RepositoryError, TeamId};
use crate::domain::team::Team;
use crate::ports::TeamRepository;

/// Map-backed implementation of [`TeamRepository`].
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            teams: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, mut team: Team) -> Result<Team, RepositoryError> {
        let mut teams = self.teams.write().await;

        if let Some(stored) = teams.get(&team.id()) {
            if stored.version() != team.version() {
                return Err(RepositoryError::conflict(
                    "Team",
                    team.id().to_string(),
                    team.version().value(),
                    stored.version().value(),
                ));
            }
        }

        apply_child_flushes(&mut team);
        teams.insert(team.id(), team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id).cloned())
    }

    async fn find_by_original_task_id(
        &self,
        original_task_id: &ProjectTaskId,
    ) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        Ok(teams
            .values()
            .find(|team| team.claims_project_task(*original_task_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TeamMemberId, TeamTaskId, Version};

    fn test_team() -> Team {
        Team::create_new(TeamId::new(), "Packers").unwrap()
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let repo = InMemoryTeamRepository::new();
        let team = test_team();
        let id = team.id();

        repo.save(team).await.unwrap();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.name(), "Packers");
    }

    #[tokio::test]
    async fn member_and_task_intake_bump_once_per_save() {
        let repo = InMemoryTeamRepository::new();
        let mut team = test_team();
        team.add_member(TeamMemberId::new(), "Robin Vale", "Carpenter");
        team.add_task(TeamTaskId::new(), ProjectTaskId::new(), "Pack", "");

        let saved = repo.save(team).await.unwrap();
        assert_eq!(saved.version(), Version::initial().next());
    }

    #[tokio::test]
    async fn assignment_only_save_still_bumps_the_version() {
        let repo = InMemoryTeamRepository::new();
        let mut team = test_team();
        let member_id = TeamMemberId::new();
        let task_id = TeamTaskId::new();
        team.add_member(member_id, "Robin Vale", "Carpenter");
        team.add_task(task_id, ProjectTaskId::new(), "Pack", "");
        let saved = repo.save(team).await.unwrap();
        assert_eq!(saved.version().value(), 1);

        // No root scalar changes here, only a child update
        let mut loaded = repo.find_by_id(&saved.id()).await.unwrap().unwrap();
        loaded.assign_task(task_id, member_id).unwrap();

        let saved_again = repo.save(loaded).await.unwrap();
        assert_eq!(saved_again.version().value(), 2);
    }

    #[tokio::test]
    async fn removal_only_save_keeps_the_version() {
        let repo = InMemoryTeamRepository::new();
        let mut team = test_team();
        let member_id = TeamMemberId::new();
        team.add_member(member_id, "Robin Vale", "Carpenter");
        let saved = repo.save(team).await.unwrap();
        assert_eq!(saved.version().value(), 1);

        let mut loaded = repo.find_by_id(&saved.id()).await.unwrap().unwrap();
        loaded.remove_member(member_id).unwrap();

        // Detached children no longer name the root, so nothing forces a bump
        let saved_again = repo.save(loaded).await.unwrap();
        assert_eq!(saved_again.version().value(), 1);
        assert_eq!(saved_again.member_count(), 0);
    }

    #[tokio::test]
    async fn stale_save_is_rejected() {
        let repo = InMemoryTeamRepository::new();
        let team = test_team();
        let id = team.id();
        repo.save(team).await.unwrap();

        let mut first = repo.find_by_id(&id).await.unwrap().unwrap();
        let mut second = repo.find_by_id(&id).await.unwrap().unwrap();

        first.add_member(TeamMemberId::new(), "Robin Vale", "Carpenter");
        repo.save(first).await.unwrap();

        second.add_member(TeamMemberId::new(), "Ash Reed", "Electrician");
        let result = repo.save(second).await;

        assert_eq!(
            result,
            Err(RepositoryError::Conflict {
                aggregate: "Team",
                id: id.to_string(),
                loaded: 0,
                stored: 1,
            })
        );
    }

    #[tokio::test]
    async fn find_by_original_task_id_locates_the_claiming_team() {
        let repo = InMemoryTeamRepository::new();
        let original = ProjectTaskId::new();

        let mut claiming = test_team();
        let claiming_id = claiming.id();
        claiming.add_task(TeamTaskId::new(), original, "Pack", "");
        repo.save(claiming).await.unwrap();
        repo.save(test_team()).await.unwrap();

        let found = repo
            .find_by_original_task_id(&original)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), claiming_id);

        let missing = repo
            .find_by_original_task_id(&ProjectTaskId::new())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
