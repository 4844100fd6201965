//! Project aggregate entity.
//!
//! A project is the planning-side container for time-estimated tasks.
//!
//! # Ownership
//!
//! The project owns its tasks outright; tasks are stored in the project's
//! arena and carry only the owning project's id, never a live reference
//! back to it. Callers never receive task references either - reads go
//! through [`ProjectTaskSnapshot`] copies, so all task mutation funnels
//! through the root and gets recorded as a child flush for the
//! optimistic-lock bump at save time.

use crate::domain::foundation::{
    AggregateRoot, ActualSpentTime, ChildFlush, ChildMutation, ContactPerson, EmailAddress,
    ProjectId, ProjectTaskId, RootAware, TimeEstimation, Timestamp, Version,
};

use super::errors::ProjectError;
use super::status::{ProjectStatus, ProjectTaskStatus};

/// Project aggregate - plans work as estimated tasks under one time budget.
///
/// # Invariants
///
/// - `name` is non-empty
/// - the sum of task estimations never exceeds `initial_estimation`
/// - completed projects accept no further task changes
/// - `status` agrees with the computed completion state
#[derive(PartialEq)]
pub struct Project {
    /// Unique identifier for this project.
    id: ProjectId,

    /// Project name.
    name: String,

    /// Free-form description.
    description: String,

    /// Current lifecycle status, kept in sync with task completion.
    status: ProjectStatus,

    /// When the project was created.
    created_at: Timestamp,

    /// Planned end of the project.
    planned_end_date: Timestamp,

    /// Total time budget the task estimations must stay within.
    initial_estimation: TimeEstimation,

    /// Person to notify about planning changes.
    contact_person: ContactPerson,

    /// Owned task arena.
    tasks: Vec<ProjectTask>,

    /// Optimistic-lock version, advanced only by repositories.
    version: Version,

    /// Child mutations recorded since the last save.
    child_flushes: Vec<ChildFlush<ProjectId>>,
}

impl Clone for Project {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            created_at: self.created_at,
            planned_end_date: self.planned_end_date,
            initial_estimation: self.initial_estimation,
            contact_person: self.contact_person.clone(),
            tasks: self.tasks.clone(),
            version: self.version,
            child_flushes: self.child_flushes.clone(),
        }
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("status", &self.status)
            .field("tasks", &self.tasks.len())
            .field("version", &self.version)
            .finish()
    }
}

impl Project {
    /// Create a new planned project with an empty task arena.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty
    pub fn create_new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: Timestamp,
        planned_end_date: Timestamp,
        initial_estimation: TimeEstimation,
        contact_person: ContactPerson,
    ) -> Result<Self, ProjectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(crate::domain::foundation::ValidationError::empty_field("name").into());
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            status: ProjectStatus::Planned,
            created_at,
            planned_end_date,
            initial_estimation,
            contact_person,
            tasks: Vec::new(),
            version: Version::initial(),
            child_flushes: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the project ID.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the stored lifecycle status.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns when the project was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the planned end of the project.
    pub fn planned_end_date(&self) -> Timestamp {
        self.planned_end_date
    }

    /// Returns the total time budget.
    pub fn initial_estimation(&self) -> TimeEstimation {
        self.initial_estimation
    }

    /// Returns the project's contact person.
    pub fn contact_person(&self) -> &ContactPerson {
        &self.contact_person
    }

    /// Returns the number of planned tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the current optimistic-lock version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns a snapshot of the task with the given id, if planned here.
    pub fn task(&self, task_id: ProjectTaskId) -> Option<ProjectTaskSnapshot> {
        self.tasks
            .iter()
            .find(|task| task.id == task_id)
            .map(ProjectTask::to_snapshot)
    }

    /// True when a task with the given id is planned in this project.
    pub fn contains_task(&self, task_id: ProjectTaskId) -> bool {
        self.tasks.iter().any(|task| task.id == task_id)
    }

    /// Returns the normalized sum of all task estimations.
    pub fn estimation_of_all_tasks(&self) -> TimeEstimation {
        self.tasks
            .iter()
            .fold(TimeEstimation::zero(), |sum, task| {
                sum.add(&task.estimation)
            })
    }

    /// A project is completed once it has at least one task and every
    /// task is complete. Computed from the tasks, never stored.
    pub fn is_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.status.is_complete())
    }

    /// Returns the contact email as a parsed address, or `None` when the
    /// captured email is not structurally valid.
    pub fn valid_contact_email(&self) -> Option<EmailAddress> {
        EmailAddress::parse(self.contact_person.email()).ok()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Plan a new task within the remaining time budget.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the project is completed
    /// - `EstimationExceeded` if the task would push the estimation sum
    ///   past the initial estimation
    pub fn add_task(
        &mut self,
        task_id: ProjectTaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        estimation: TimeEstimation,
    ) -> Result<(), ProjectError> {
        self.ensure_open()?;

        let requested = self.estimation_of_all_tasks().add(&estimation);
        if requested.exceeds(&self.initial_estimation) {
            return Err(ProjectError::EstimationExceeded {
                limit: self.initial_estimation,
                requested,
            });
        }

        let task = ProjectTask::new(task_id, self.id, title.into(), description.into(), estimation);
        let flush = ChildFlush::new(ChildMutation::Created, &task);
        self.tasks.push(task);
        self.child_flushes.push(flush);
        Ok(())
    }

    /// Record a task as complete with the time actually spent.
    ///
    /// Completing an already complete task overwrites its actual time;
    /// execution-side redeliveries land on the same task more than once.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the whole project is completed
    /// - `UnknownTask` if no task has the given id
    pub fn complete_task(
        &mut self,
        task_id: ProjectTaskId,
        actual_spent_time: ActualSpentTime,
    ) -> Result<(), ProjectError> {
        self.ensure_open()?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(ProjectError::UnknownTask(task_id))?;
        task.complete(actual_spent_time);
        let flush = ChildFlush::new(ChildMutation::Updated, &*task);
        self.child_flushes.push(flush);

        if self.is_completed() {
            self.status = ProjectStatus::Completed;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the project still accepts task changes.
    ///
    /// Gates on the stored status, which `complete_task` keeps in sync
    /// with the computed completion state.
    fn ensure_open(&self) -> Result<(), ProjectError> {
        if self.status.is_open() {
            Ok(())
        } else {
            Err(ProjectError::AlreadyCompleted(self.id))
        }
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn force_version_increment(&mut self) {
        self.version = self.version.next();
    }

    fn drain_child_flushes(&mut self) -> Vec<ChildFlush<ProjectId>> {
        std::mem::take(&mut self.child_flushes)
    }
}

/// A task planned within a project. Lives only inside the project's arena.
#[derive(Debug, Clone, PartialEq)]
struct ProjectTask {
    id: ProjectTaskId,
    project_id: Option<ProjectId>,
    title: String,
    description: String,
    estimation: TimeEstimation,
    status: ProjectTaskStatus,
    actual_spent_time: Option<ActualSpentTime>,
}

impl ProjectTask {
    fn new(
        id: ProjectTaskId,
        project_id: ProjectId,
        title: String,
        description: String,
        estimation: TimeEstimation,
    ) -> Self {
        Self {
            id,
            project_id: Some(project_id),
            title,
            description,
            estimation,
            status: ProjectTaskStatus::Incomplete,
            actual_spent_time: None,
        }
    }

    fn complete(&mut self, actual_spent_time: ActualSpentTime) {
        self.status = ProjectTaskStatus::Complete;
        self.actual_spent_time = Some(actual_spent_time);
    }

    fn to_snapshot(&self) -> ProjectTaskSnapshot {
        ProjectTaskSnapshot {
            task_id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            estimation: self.estimation,
            status: self.status,
            actual_spent_time: self.actual_spent_time,
        }
    }
}

impl RootAware for ProjectTask {
    type RootId = ProjectId;

    fn root_id(&self) -> Option<ProjectId> {
        self.project_id
    }
}

/// Point-in-time copy of a planned task, safe to hand across contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTaskSnapshot {
    /// ID of the task within its project.
    pub task_id: ProjectTaskId,

    /// Task title.
    pub title: String,

    /// Task description.
    pub description: String,

    /// Planned effort.
    pub estimation: TimeEstimation,

    /// Completion status at snapshot time.
    pub status: ProjectTaskStatus,

    /// Actual effort, present once the task is complete.
    pub actual_spent_time: Option<ActualSpentTime>,
}
