//! In-memory project repository.
//!
//! Backs the project repository port with a plain map for tests and the
//! demo wiring. Optimistic-lock semantics match what a database-backed
//! adapter would enforce: stale saves are rejected, child flushes are
//! folded into one version bump at save time.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{apply_child_flushes, ProjectId, ProjectTaskId, RepositoryError};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// Map-backed implementation of [`ProjectRepository`].
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, mut project: Project) -> Result<Project, RepositoryError> {
        let mut projects = self.projects.write().await;

        if let Some(stored) = projects.get(&project.id()) {
            if stored.version() != project.version() {
                return Err(RepositoryError::conflict(
                    "Project",
                    project.id().to_string(),
                    project.version().value(),
                    stored.version().value(),
                ));
            }
        }

        apply_child_flushes(&mut project);
        projects.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        let projects = self.projects.read().await;
        Ok(projects.get(id).cloned())
    }

    async fn find_by_task_id(
        &self,
        task_id: &ProjectTaskId,
    ) -> Result<Option<Project>, RepositoryError> {
        let projects = self.projects.read().await;
        Ok(projects
            .values()
            .find(|project| project.contains_task(*task_id))
            .cloned())
    }
}
