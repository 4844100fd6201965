//! Team aggregate entity.
//!
//! A team is the execution-side roster of members and the tasks they have
//! taken on from project planning.
//!
//! # Ownership
//!
//! The team owns its members and tasks outright; both live in the team's
//! arena and carry only the owning team's id, never a live reference back
//! to it. Callers get shared references for reads, so all mutation funnels
//! through the root and gets recorded as a child flush for the
//! optimistic-lock bump at save time.

use crate::domain::foundation::{
    ActualSpentTime, AggregateRoot, ChildFlush, ChildMutation, ProjectTaskId, RootAware,
    StateMachine, TeamId, TeamMemberId, TeamTaskId, Version,
};

use super::errors::TeamError;
use super::task_status::TeamTaskStatus;

/// Team aggregate - staffs members and runs tasks through their lifecycle.
///
/// # Invariants
///
/// - `name` is non-empty
/// - a task is assigned to at most one member, and only to a member of
///   this team
/// - members with open assignments cannot be removed
/// - tasks can only be removed while not assigned
#[derive(PartialEq)]
pub struct Team {
    /// Unique identifier for this team.
    id: TeamId,

    /// Team name.
    name: String,

    /// Owned member arena.
    members: Vec<TeamMember>,

    /// Owned task arena.
    tasks: Vec<TeamTask>,

    /// Optimistic-lock version, advanced only by repositories.
    version: Version,

    /// Child mutations recorded since the last save.
    child_flushes: Vec<ChildFlush<TeamId>>,
}

impl Clone for Team {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            members: self.members.clone(),
            tasks: self.tasks.clone(),
            version: self.version,
            child_flushes: self.child_flushes.clone(),
        }
    }
}

impl std::fmt::Debug for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Team")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("members", &self.members.len())
            .field("tasks", &self.tasks.len())
            .field("version", &self.version)
            .finish()
    }
}

impl Team {
    /// Create a new team with empty member and task arenas.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty
    pub fn create_new(id: TeamId, name: impl Into<String>) -> Result<Self, TeamError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(crate::domain::foundation::ValidationError::empty_field("name").into());
        }

        Ok(Self {
            id,
            name,
            members: Vec::new(),
            tasks: Vec::new(),
            version: Version::initial(),
            child_flushes: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the team ID.
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of members on the roster.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the number of tasks the team has taken on.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the current optimistic-lock version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the member with the given id, if on the roster.
    pub fn member(&self, member_id: TeamMemberId) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == member_id)
    }

    /// Returns the task with the given id, if taken on by this team.
    pub fn task(&self, task_id: TeamTaskId) -> Option<&TeamTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Returns the project task a team task was taken on for.
    pub fn original_task_id(&self, task_id: TeamTaskId) -> Option<ProjectTaskId> {
        self.task(task_id).map(|task| task.original_task_id)
    }

    /// True when this team has taken on the given project task.
    pub fn claims_project_task(&self, original_task_id: ProjectTaskId) -> bool {
        self.tasks
            .iter()
            .any(|task| task.original_task_id == original_task_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Put a new member on the roster.
    pub fn add_member(
        &mut self,
        member_id: TeamMemberId,
        name: impl Into<String>,
        profession: impl Into<String>,
    ) {
        let member = TeamMember::new(member_id, self.id, name.into(), profession.into());
        let flush = ChildFlush::new(ChildMutation::Created, &member);
        self.members.push(member);
        self.child_flushes.push(flush);
    }

    /// Take on a project task for execution. The task starts unassigned.
    pub fn add_task(
        &mut self,
        task_id: TeamTaskId,
        original_task_id: ProjectTaskId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) {
        let task = TeamTask::new(
            task_id,
            self.id,
            original_task_id,
            name.into(),
            description.into(),
        );
        let flush = ChildFlush::new(ChildMutation::Created, &task);
        self.tasks.push(task);
        self.child_flushes.push(flush);
    }

    /// Take a member off the roster.
    ///
    /// # Errors
    ///
    /// - `UnknownMember` if no member has the given id
    /// - `MemberHasAssignedTasks` if the member still holds an open
    ///   assignment
    pub fn remove_member(&mut self, member_id: TeamMemberId) -> Result<(), TeamError> {
        let position = self
            .members
            .iter()
            .position(|member| member.id == member_id)
            .ok_or(TeamError::UnknownMember(member_id))?;

        // Completed tasks no longer reference their assignee, so only
        // open work blocks removal.
        let has_assignment = self
            .tasks
            .iter()
            .any(|task| task.assignee_id == Some(member_id));
        if has_assignment {
            return Err(TeamError::MemberHasAssignedTasks(member_id));
        }

        let mut member = self.members.remove(position);
        member.detach();
        let flush = ChildFlush::new(ChildMutation::Removed, &member);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Give a task back before any member has picked it up.
    ///
    /// # Errors
    ///
    /// - `UnknownTask` if no task has the given id
    /// - `TaskCannotBeDeleted` once the task has been assigned
    pub fn remove_task(&mut self, task_id: TeamTaskId) -> Result<(), TeamError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or(TeamError::UnknownTask(task_id))?;
        if !self.tasks[position].status.is_deletable() {
            return Err(TeamError::TaskCannotBeDeleted(task_id));
        }

        let mut task = self.tasks.remove(position);
        task.detach();
        let flush = ChildFlush::new(ChildMutation::Removed, &task);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Assign an unassigned task to a member of this team.
    ///
    /// # Errors
    ///
    /// - `UnknownTask` if no task has the given id
    /// - `UnknownMember` if the assignee is not on the roster
    /// - `TransitionNotAllowed` if the task is already assigned or beyond
    pub fn assign_task(
        &mut self,
        task_id: TeamTaskId,
        member_id: TeamMemberId,
    ) -> Result<(), TeamError> {
        if !self.tasks.iter().any(|task| task.id == task_id) {
            return Err(TeamError::UnknownTask(task_id));
        }
        if !self.members.iter().any(|member| member.id == member_id) {
            return Err(TeamError::UnknownMember(member_id));
        }

        let task = self.task_mut(task_id)?;
        task.assign_to(member_id)?;
        let flush = ChildFlush::new(ChildMutation::Updated, &*task);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Record that the assignee has started working on a task.
    ///
    /// # Errors
    ///
    /// - `UnknownTask` if no task has the given id
    /// - `TransitionNotAllowed` unless the task is assigned
    pub fn mark_task_in_progress(&mut self, task_id: TeamTaskId) -> Result<(), TeamError> {
        let task = self.task_mut(task_id)?;
        task.start()?;
        let flush = ChildFlush::new(ChildMutation::Updated, &*task);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Record a task as finished with the time actually spent.
    ///
    /// # Errors
    ///
    /// - `UnknownTask` if no task has the given id
    /// - `TransitionNotAllowed` unless the task is in progress
    pub fn mark_task_completed(
        &mut self,
        task_id: TeamTaskId,
        actual_spent_time: ActualSpentTime,
    ) -> Result<(), TeamError> {
        let task = self.task_mut(task_id)?;
        task.complete(actual_spent_time)?;
        let flush = ChildFlush::new(ChildMutation::Updated, &*task);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Hand an assigned task back to the unassigned pool.
    ///
    /// # Errors
    ///
    /// - `UnknownTask` if no task has the given id
    /// - `TransitionNotAllowed` unless the task is assigned and not yet
    ///   started
    pub fn mark_task_unassigned(&mut self, task_id: TeamTaskId) -> Result<(), TeamError> {
        let task = self.task_mut(task_id)?;
        task.unassign()?;
        let flush = ChildFlush::new(ChildMutation::Updated, &*task);
        self.child_flushes.push(flush);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn task_mut(&mut self, task_id: TeamTaskId) -> Result<&mut TeamTask, TeamError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(TeamError::UnknownTask(task_id))
    }
}

impl AggregateRoot for Team {
    type Id = TeamId;

    fn id(&self) -> TeamId {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn force_version_increment(&mut self) {
        self.version = self.version.next();
    }

    fn drain_child_flushes(&mut self) -> Vec<ChildFlush<TeamId>> {
        std::mem::take(&mut self.child_flushes)
    }
}

/// A member on a team's roster. Lives only inside the team's arena.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    id: TeamMemberId,
    team_id: Option<TeamId>,
    name: String,
    profession: String,
}

impl TeamMember {
    fn new(id: TeamMemberId, team_id: TeamId, name: String, profession: String) -> Self {
        Self {
            id,
            team_id: Some(team_id),
            name,
            profession,
        }
    }

    /// Returns the member ID.
    pub fn id(&self) -> TeamMemberId {
        self.id
    }

    /// Returns the member's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's profession.
    pub fn profession(&self) -> &str {
        &self.profession
    }

    fn detach(&mut self) {
        self.team_id = None;
    }
}

impl RootAware for TeamMember {
    type RootId = TeamId;

    fn root_id(&self) -> Option<TeamId> {
        self.team_id
    }
}

/// A task a team has taken on. Lives only inside the team's arena.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTask {
    id: TeamTaskId,
    team_id: Option<TeamId>,
    original_task_id: ProjectTaskId,
    name: String,
    description: String,
    status: TeamTaskStatus,
    assignee_id: Option<TeamMemberId>,
    actual_spent_time: Option<ActualSpentTime>,
}

impl TeamTask {
    fn new(
        id: TeamTaskId,
        team_id: TeamId,
        original_task_id: ProjectTaskId,
        name: String,
        description: String,
    ) -> Self {
        Self {
            id,
            team_id: Some(team_id),
            original_task_id,
            name,
            description,
            status: TeamTaskStatus::NotAssigned,
            assignee_id: None,
            actual_spent_time: None,
        }
    }

    /// Returns the task ID.
    pub fn id(&self) -> TeamTaskId {
        self.id
    }

    /// Returns the project task this task was taken on for.
    pub fn original_task_id(&self) -> ProjectTaskId {
        self.original_task_id
    }

    /// Returns the task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current execution status.
    pub fn status(&self) -> TeamTaskStatus {
        self.status
    }

    /// Returns the member the task is assigned to, if any.
    pub fn assignee_id(&self) -> Option<TeamMemberId> {
        self.assignee_id
    }

    /// Returns the time actually spent, present once completed.
    pub fn actual_spent_time(&self) -> Option<ActualSpentTime> {
        self.actual_spent_time
    }

    fn assign_to(&mut self, member_id: TeamMemberId) -> Result<(), TeamError> {
        self.transition(TeamTaskStatus::Assigned)?;
        self.assignee_id = Some(member_id);
        Ok(())
    }

    fn start(&mut self) -> Result<(), TeamError> {
        self.transition(TeamTaskStatus::InProgress)
    }

    fn complete(&mut self, actual_spent_time: ActualSpentTime) -> Result<(), TeamError> {
        self.transition(TeamTaskStatus::Completed)?;
        self.assignee_id = None;
        self.actual_spent_time = Some(actual_spent_time);
        Ok(())
    }

    fn unassign(&mut self) -> Result<(), TeamError> {
        self.transition(TeamTaskStatus::NotAssigned)?;
        self.assignee_id = None;
        Ok(())
    }

    fn detach(&mut self) {
        self.team_id = None;
    }

    fn transition(&mut self, to: TeamTaskStatus) -> Result<(), TeamError> {
        if !self.status.can_transition_to(&to) {
            return Err(TeamError::TransitionNotAllowed {
                task_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl RootAware for TeamTask {
    type RootId = TeamId;

    fn root_id(&self) -> Option<TeamId> {
        self.team_id
    }
}
