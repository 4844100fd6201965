//! NotifyContactOnTaskAdded - Event handler for TaskAddedToProject events.
//!
//! Tells a project's contact person about newly planned tasks. The contact
//! email is validated here, at notification time, and the consent policy is
//! consulted before anything goes out. Notification problems never fail the
//! event: a task stays planned whether or not the contact could be reached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::foundation::{EventEnvelope, EventError};
use crate::domain::project::TaskAddedToProject;
use crate::ports::{EventHandler, NotificationPolicy, ProjectRepository};

/// Handles TaskAddedToProject events to notify the project contact.
///
/// For each planned task, this handler:
/// 1. Loads the project named by the event
/// 2. Parses the captured contact email, skipping silently when invalid
/// 3. Asks the consent policy whether the address may be mailed
pub struct NotifyContactOnTaskAdded {
    projects: Arc<dyn ProjectRepository>,
    policy: Arc<dyn NotificationPolicy>,
}

impl NotifyContactOnTaskAdded {
    /// Creates a new handler backed by the given project store and policy.
    pub fn new(projects: Arc<dyn ProjectRepository>, policy: Arc<dyn NotificationPolicy>) -> Self {
        Self { projects, policy }
    }
}

#[async_trait]
impl EventHandler for NotifyContactOnTaskAdded {
    async fn handle(&self, event: EventEnvelope) -> Result<(), EventError> {
        // Parse the planned task event
        let added: TaskAddedToProject = event
            .payload_as()
            .map_err(|e| EventError::decode(&event.event_type, e))?;

        // Load the project
        let project = match self.projects.find_by_id(&added.project_id).await {
            Ok(Some(project)) => project,
            Ok(None) => {
                warn!(
                    project_id = %added.project_id,
                    event_id = %event.event_id,
                    "No project for planned task, dropping event"
                );
                return Ok(());
            }
            Err(e) => return Err(EventError::handler(self.name(), e)),
        };

        // The email is stored as entered and may not be an address at all
        let Some(email) = project.valid_contact_email() else {
            debug!(
                project_id = %added.project_id,
                "Contact email does not parse, skipping notification"
            );
            return Ok(());
        };

        if self.policy.is_notification_allowed(&email).await {
            info!(
                project_id = %added.project_id,
                task_id = %added.task_id,
                contact = %project.contact_person().name(),
                email = %email,
                correlation_id = ?event.metadata.correlation_id,
                "Notifying contact about newly planned task"
            );
        } else {
            debug!(
                project_id = %added.project_id,
                email = %email,
                "Contact has opted out, skipping notification"
            );
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "NotifyContactOnTaskAdded"
    }
}
