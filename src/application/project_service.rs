//! ProjectService - Application service for the project planning context.

use std::sync::Arc;

use crate::domain::foundation::{
    ContactPerson, EventId, ProjectId, ProjectTaskId, SerializableDomainEvent, TimeEstimation,
    Timestamp,
};
use crate::domain::project::{Project, ProjectError, TaskAddedToProject};
use crate::ports::{Clock, EventPublisher, IdSource, ProjectRepository};

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub planned_end_date: Timestamp,
    pub initial_estimation: TimeEstimation,
    pub contact_name: String,
    pub contact_email: String,
}

/// Orchestrates project planning workflows.
///
/// Ids are minted before any store access, so callers know the id of a
/// new project or task even when the save fails afterwards.
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventPublisher>,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            projects,
            ids,
            clock,
            events,
        }
    }

    /// Create a new project.
    pub async fn create_project(&self, input: NewProject) -> Result<ProjectId, ProjectError> {
        // 1. Mint the id
        let project_id = self.ids.next_project_id();

        // 2. Build the aggregate
        let contact = ContactPerson::new(input.contact_name, input.contact_email)?;
        let project = Project::create_new(
            project_id,
            input.name,
            input.description,
            self.clock.now(),
            input.planned_end_date,
            input.initial_estimation,
            contact,
        )?;

        // 3. Persist
        self.projects.save(project).await?;

        Ok(project_id)
    }

    /// Plan a new task in a project.
    pub async fn add_task_to(
        &self,
        project_id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        estimation: TimeEstimation,
    ) -> Result<ProjectTaskId, ProjectError> {
        // 1. Mint the task id
        let task_id = self.ids.next_project_task_id();

        // 2. Load the project
        let mut project = self
            .projects
            .find_by_id(&project_id)
            .await?
            .ok_or(ProjectError::UnknownProject(project_id))?;

        // 3. Plan the task within the budget
        project.add_task(task_id, title, description, estimation)?;

        // 4. Persist
        let saved = self.projects.save(project).await?;

        // 5. Publish once the save has stuck
        let event = TaskAddedToProject {
            event_id: EventId::new(),
            project_id: saved.id(),
            task_id,
            occurred_at: self.clock.now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(project_id.to_string());
        self.events.publish(envelope).await?;

        Ok(task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, UuidIdSource};
    use crate::domain::foundation::{EventEnvelope, EventError, RepositoryError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockProjectRepository {
        projects: Mutex<HashMap<ProjectId, Project>>,
        fail_save: bool,
    }

    impl MockProjectRepository {
        fn new() -> Self {
            Self {
                projects: Mutex::new(HashMap::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                projects: Mutex::new(HashMap::new()),
                fail_save: true,
            }
        }

        fn with_project(project: Project) -> Self {
            let repo = Self::new();
            repo.projects.lock().unwrap().insert(project.id(), project);
            repo
        }

        fn get(&self, id: &ProjectId) -> Option<Project> {
            self.projects.lock().unwrap().get(id).cloned()
        }
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepository {
        async fn save(&self, project: Project) -> Result<Project, RepositoryError> {
            if self.fail_save {
                return Err(RepositoryError::storage("simulated save failure"));
            }
            self.projects
                .lock()
                .unwrap()
                .insert(project.id(), project.clone());
            Ok(project)
        }

        async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
            Ok(self.projects.lock().unwrap().get(id).cloned())
        }

        async fn find_by_task_id(
            &self,
            task_id: &ProjectTaskId,
        ) -> Result<Option<Project>, RepositoryError> {
            Ok(self
                .projects
                .lock()
                .unwrap()
                .values()
                .find(|project| project.contains_task(*task_id))
                .cloned())
        }
    }

    struct MockEventPublisher {
        published_events: Mutex<Vec<EventEnvelope>>,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                published_events: Mutex::new(Vec::new()),
            }
        }

        fn published_events(&self) -> Vec<EventEnvelope> {
            self.published_events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), EventError> {
            self.published_events.lock().unwrap().push(event);
            Ok(())
        }

        async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), EventError> {
            for event in events {
                self.publish(event).await?;
            }
            Ok(())
        }
    }

    fn service(
        repo: Arc<MockProjectRepository>,
        publisher: Arc<MockEventPublisher>,
    ) -> ProjectService {
        ProjectService::new(
            repo,
            Arc::new(UuidIdSource::new()),
            Arc::new(FixedClock::at(Timestamp::from_unix_secs(1_700_000_000))),
            publisher,
        )
    }

    fn new_project_input() -> NewProject {
        NewProject {
            name: "Warehouse move".to_string(),
            description: "Relocate the packing line".to_string(),
            planned_end_date: Timestamp::from_unix_secs(1_700_000_000).plus_days(30),
            initial_estimation: TimeEstimation::from_minutes(600),
            contact_name: "Dana Field".to_string(),
            contact_email: "dana@example.com".to_string(),
        }
    }

    fn stored_project() -> Project {
        Project::create_new(
            ProjectId::new(),
            "Warehouse move",
            "",
            Timestamp::from_unix_secs(1_700_000_000),
            Timestamp::from_unix_secs(1_700_000_000).plus_days(30),
            TimeEstimation::from_minutes(120),
            ContactPerson::new("Dana Field", "dana@example.com").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_project_persists_and_returns_the_minted_id() {
        let repo = Arc::new(MockProjectRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let service = service(repo.clone(), publisher.clone());

        let project_id = service.create_project(new_project_input()).await.unwrap();

        let stored = repo.get(&project_id).unwrap();
        assert_eq!(stored.name(), "Warehouse move");
        assert_eq!(stored.created_at(), Timestamp::from_unix_secs(1_700_000_000));
        // Project creation itself publishes nothing
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn create_project_rejects_empty_contact_name() {
        let repo = Arc::new(MockProjectRepository::new());
        let service = service(repo.clone(), Arc::new(MockEventPublisher::new()));

        let mut input = new_project_input();
        input.contact_name = "  ".to_string();

        let result = service.create_project(input).await;
        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }

    #[tokio::test]
    async fn add_task_publishes_event_after_save() {
        let project = stored_project();
        let project_id = project.id();
        let repo = Arc::new(MockProjectRepository::with_project(project));
        let publisher = Arc::new(MockEventPublisher::new());
        let service = service(repo.clone(), publisher.clone());

        let task_id = service
            .add_task_to(project_id, "Pack shelves", "Wrap and box", TimeEstimation::from_minutes(90))
            .await
            .unwrap();

        let stored = repo.get(&project_id).unwrap();
        assert!(stored.contains_task(task_id));

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "project.task_added.v1");
        assert_eq!(events[0].aggregate_id, project_id.to_string());
        assert_eq!(
            events[0].metadata.correlation_id,
            Some(project_id.to_string())
        );

        let payload: TaskAddedToProject = events[0].payload_as().unwrap();
        assert_eq!(payload.task_id, task_id);
    }

    #[tokio::test]
    async fn add_task_to_unknown_project_fails() {
        let repo = Arc::new(MockProjectRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let service = service(repo, publisher.clone());

        let result = service
            .add_task_to(ProjectId::new(), "Task", "", TimeEstimation::from_minutes(30))
            .await;

        assert!(matches!(result, Err(ProjectError::UnknownProject(_))));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn budget_overflow_is_propagated() {
        let project = stored_project();
        let project_id = project.id();
        let repo = Arc::new(MockProjectRepository::with_project(project));
        let service = service(repo, Arc::new(MockEventPublisher::new()));

        let result = service
            .add_task_to(project_id, "Too big", "", TimeEstimation::from_minutes(121))
            .await;

        assert!(matches!(result, Err(ProjectError::EstimationExceeded { .. })));
    }

    #[tokio::test]
    async fn does_not_publish_event_on_save_failure() {
        let repo = Arc::new(MockProjectRepository::failing());
        let project = stored_project();
        let project_id = project.id();
        repo.projects.lock().unwrap().insert(project_id, project);
        let publisher = Arc::new(MockEventPublisher::new());
        let service = service(repo, publisher.clone());

        let result = service
            .add_task_to(project_id, "Task", "", TimeEstimation::from_minutes(30))
            .await;

        assert!(matches!(result, Err(ProjectError::Repository(_))));
        assert!(publisher.published_events().is_empty());
    }
}
