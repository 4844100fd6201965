//! CompleteProjectTaskOnTeamTaskCompleted - Event handler for TeamTaskCompleted events.
//!
//! Listens for task completions reported by the team execution context and
//! folds them back into the planning side. The project learns about finished
//! work through this handler instead of sharing an aggregate with the team.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::foundation::{EventEnvelope, EventError};
use crate::domain::project::ProjectError;
use crate::domain::team::TeamTaskCompleted;
use crate::ports::{EventHandler, ProjectRepository};

/// Handles TeamTaskCompleted events to update the planning side.
///
/// For each completion, this handler:
/// 1. Resolves the project that owns the original task
/// 2. Marks that task complete with the actual time spent
/// 3. Persists the project, which may flip it to completed
///
/// Events for tasks whose project is gone are dropped with a warning, and
/// redeliveries after the project closed are tolerated, so the consumer
/// stays safe under at-least-once delivery.
pub struct CompleteProjectTaskOnTeamTaskCompleted {
    projects: Arc<dyn ProjectRepository>,
}

impl CompleteProjectTaskOnTeamTaskCompleted {
    /// Creates a new handler backed by the given project store.
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl EventHandler for CompleteProjectTaskOnTeamTaskCompleted {
    async fn handle(&self, event: EventEnvelope) -> Result<(), EventError> {
        // Parse the completion reported by the team side
        let completed: TeamTaskCompleted = event
            .payload_as()
            .map_err(|e| EventError::decode(&event.event_type, e))?;

        // Resolve the owning project
        let mut project = match self
            .projects
            .find_by_task_id(&completed.original_task_id)
            .await
        {
            Ok(Some(project)) => project,
            Ok(None) => {
                warn!(
                    original_task_id = %completed.original_task_id,
                    event_id = %event.event_id,
                    "No project holds the completed task, dropping event"
                );
                return Ok(());
            }
            Err(e) => return Err(EventError::handler(self.name(), e)),
        };

        // Fold the completion into the plan
        match project.complete_task(completed.original_task_id, completed.actual_spent_time) {
            Ok(()) => {}
            Err(ProjectError::AlreadyCompleted(project_id)) => {
                debug!(
                    project_id = %project_id,
                    event_id = %event.event_id,
                    "Project already completed, treating event as redelivery"
                );
                return Ok(());
            }
            Err(e) => return Err(EventError::handler(self.name(), e)),
        }

        // Persist
        self.projects
            .save(project)
            .await
            .map_err(|e| EventError::handler(self.name(), e))?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "CompleteProjectTaskOnTeamTaskCompleted"
    }
}
