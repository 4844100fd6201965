//! Project repository port (write side).
//!
//! Defines the contract for persisting and retrieving Project aggregates.
//!
//! # Design
//!
//! - **Root-aware versioning**: `save` consumes the aggregate's recorded
//!   child flushes and advances the version once when any flush still
//!   names the root
//! - **Conflict detection**: a save against a stale version fails instead
//!   of overwriting newer state

use async_trait::async_trait;

use crate::domain::foundation::{ProjectId, ProjectTaskId, RepositoryError};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist the aggregate and return the stored copy.
    ///
    /// The returned aggregate carries the advanced version, so callers
    /// that keep working with it stay conflict-free.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the store holds a different version than the one
    ///   this aggregate was loaded at
    /// - `Storage` on persistence failure
    async fn save(&self, project: Project) -> Result<Project, RepositoryError>;

    /// Find a project by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError>;

    /// Find the project that plans the given task.
    ///
    /// Returns `None` when no project contains the task.
    async fn find_by_task_id(
        &self,
        task_id: &ProjectTaskId,
    ) -> Result<Option<Project>, RepositoryError>;
}
