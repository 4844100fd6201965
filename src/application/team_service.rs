//! TeamService - Application service for the team execution context.

use std::sync::Arc;

use crate::domain::foundation::{
    ActualSpentTime, EventId, ProjectTaskId, SerializableDomainEvent, TeamId, TeamMemberId,
    TeamTaskId,
};
use crate::domain::team::{Team, TeamError, TeamTaskCompleted};
use crate::ports::{Clock, EventPublisher, IdSource, ProjectRepository, TeamRepository};

/// Orchestrates team staffing and task execution workflows.
///
/// The planning side is only read here, never written; completions reach
/// it through the `TeamTaskCompleted` event.
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    projects: Arc<dyn ProjectRepository>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventPublisher>,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        projects: Arc<dyn ProjectRepository>,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            teams,
            projects,
            ids,
            clock,
            events,
        }
    }

    /// Create a new team.
    pub async fn create_team(&self, name: impl Into<String>) -> Result<TeamId, TeamError> {
        let team_id = self.ids.next_team_id();
        let team = Team::create_new(team_id, name)?;
        self.teams.save(team).await?;
        Ok(team_id)
    }

    /// Put a new member on a team's roster.
    pub async fn add_member(
        &self,
        team_id: TeamId,
        name: impl Into<String>,
        profession: impl Into<String>,
    ) -> Result<TeamMemberId, TeamError> {
        let member_id = self.ids.next_team_member_id();
        let mut team = self.load(team_id).await?;
        team.add_member(member_id, name, profession);
        self.teams.save(team).await?;
        Ok(member_id)
    }

    /// Take a member off a team's roster.
    pub async fn remove_member(
        &self,
        team_id: TeamId,
        member_id: TeamMemberId,
    ) -> Result<(), TeamError> {
        let mut team = self.load(team_id).await?;
        team.remove_member(member_id)?;
        self.teams.save(team).await?;
        Ok(())
    }

    /// Take on a planned project task for execution.
    pub async fn add_task(
        &self,
        team_id: TeamId,
        original_task_id: ProjectTaskId,
    ) -> Result<TeamTaskId, TeamError> {
        // 1. Mint the task id
        let task_id = self.ids.next_team_task_id();

        // 2. Reject tasks another team already claims. This check and the
        //    save below are separate reads; a claim landing in between is
        //    not detected.
        if self
            .teams
            .find_by_original_task_id(&original_task_id)
            .await?
            .is_some()
        {
            return Err(TeamError::TaskAlreadyAssigned(original_task_id));
        }

        // 3. Pull title and description from the planning side
        let planned = self
            .projects
            .find_by_task_id(&original_task_id)
            .await?
            .ok_or(TeamError::UnknownProjectTask(original_task_id))?;
        let snapshot = planned
            .task(original_task_id)
            .ok_or(TeamError::UnknownProjectTask(original_task_id))?;

        // 4. Load the team and take the task on
        let mut team = self.load(team_id).await?;
        team.add_task(task_id, original_task_id, snapshot.title, snapshot.description);

        // 5. Persist
        self.teams.save(team).await?;
        Ok(task_id)
    }

    /// Assign a task to a member of the team.
    pub async fn assign_task(
        &self,
        team_id: TeamId,
        task_id: TeamTaskId,
        member_id: TeamMemberId,
    ) -> Result<(), TeamError> {
        let mut team = self.load(team_id).await?;
        team.assign_task(task_id, member_id)?;
        self.teams.save(team).await?;
        Ok(())
    }

    /// Record that work on a task has started.
    pub async fn mark_task_in_progress(
        &self,
        team_id: TeamId,
        task_id: TeamTaskId,
    ) -> Result<(), TeamError> {
        let mut team = self.load(team_id).await?;
        team.mark_task_in_progress(task_id)?;
        self.teams.save(team).await?;
        Ok(())
    }

    /// Hand an assigned task back to the unassigned pool.
    pub async fn unassign_task(
        &self,
        team_id: TeamId,
        task_id: TeamTaskId,
    ) -> Result<(), TeamError> {
        let mut team = self.load(team_id).await?;
        team.mark_task_unassigned(task_id)?;
        self.teams.save(team).await?;
        Ok(())
    }

    /// Give a not-yet-assigned task back.
    pub async fn remove_task(&self, team_id: TeamId, task_id: TeamTaskId) -> Result<(), TeamError> {
        let mut team = self.load(team_id).await?;
        team.remove_task(task_id)?;
        self.teams.save(team).await?;
        Ok(())
    }

    /// Record a task as finished and report the completion to the
    /// planning side.
    pub async fn complete_task(
        &self,
        team_id: TeamId,
        task_id: TeamTaskId,
        actual_spent_time: ActualSpentTime,
    ) -> Result<(), TeamError> {
        // 1. Load and complete
        let mut team = self.load(team_id).await?;
        team.mark_task_completed(task_id, actual_spent_time)?;

        // 2. Persist
        let saved = self.teams.save(team).await?;

        // 3. Publish once the save has stuck
        if let Some(original_task_id) = saved.original_task_id(task_id) {
            let event = TeamTaskCompleted {
                event_id: EventId::new(),
                team_id: saved.id(),
                task_id,
                original_task_id,
                actual_spent_time,
                occurred_at: self.clock.now(),
            };
            let envelope = event
                .to_envelope()
                .with_correlation_id(team_id.to_string());
            self.events.publish(envelope).await?;
        }

        Ok(())
    }

    async fn load(&self, team_id: TeamId) -> Result<Team, TeamError> {
        self.teams
            .find_by_id(&team_id)
            .await?
            .ok_or(TeamError::UnknownTeam(team_id))
    }
}
