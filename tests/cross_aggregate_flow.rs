//! Integration tests for the cross-context flow.
//!
//! These tests run the real services, adapters, and event handlers together:
//! 1. The project side plans tasks and publishes through the outbox
//! 2. A team claims, works, and completes the planned tasks
//! 3. The outbox relay carries events to the bus
//! 4. Handlers fold team completions back into the plan
//!
//! Everything runs on the in-memory adapters, so each test owns its world.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use taskbridge::adapters::{
    FixedClock, InMemoryEventBus, InMemoryOutbox, InMemoryProjectRepository,
    InMemoryTeamRepository, OptOutList, OutboxRelay, OutboxRelayConfig, UuidIdSource,
};
use taskbridge::application::{
    CompleteProjectTaskOnTeamTaskCompleted, NewProject, NotifyContactOnTaskAdded, ProjectService,
    TeamService,
};
use taskbridge::domain::foundation::{
    ActualSpentTime, EmailAddress, ProjectId, ProjectTaskId, RepositoryError, TimeEstimation,
    Timestamp,
};
use taskbridge::domain::team::TeamError;
use taskbridge::ports::{EventPublisher, EventSubscriber, ProjectRepository};

// =============================================================================
// Test World
// =============================================================================

/// Fully wired application on in-memory adapters.
struct World {
    projects: Arc<InMemoryProjectRepository>,
    outbox: Arc<InMemoryOutbox>,
    bus: Arc<InMemoryEventBus>,
    opt_outs: Arc<OptOutList>,
    relay: Arc<OutboxRelay>,
    project_service: ProjectService,
    team_service: TeamService,
}

fn world() -> World {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let teams = Arc::new(InMemoryTeamRepository::new());
    let ids = Arc::new(UuidIdSource::new());
    let clock = Arc::new(FixedClock::at(base_time()));
    let outbox = Arc::new(InMemoryOutbox::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let opt_outs = Arc::new(OptOutList::new());

    bus.subscribe(
        "team.task_completed.v1",
        Arc::new(CompleteProjectTaskOnTeamTaskCompleted::new(projects.clone())),
    );
    bus.subscribe(
        "project.task_added.v1",
        Arc::new(NotifyContactOnTaskAdded::new(
            projects.clone(),
            opt_outs.clone(),
        )),
    );

    let relay = Arc::new(OutboxRelay::with_config(
        outbox.clone(),
        bus.clone(),
        OutboxRelayConfig::default().with_poll_interval(Duration::from_millis(10)),
    ));

    let project_service = ProjectService::new(
        projects.clone(),
        ids.clone(),
        clock.clone(),
        outbox.clone(),
    );
    let team_service = TeamService::new(
        teams,
        projects.clone(),
        ids,
        clock,
        outbox.clone(),
    );

    World {
        projects,
        outbox,
        bus,
        opt_outs,
        relay,
        project_service,
        team_service,
    }
}

fn base_time() -> Timestamp {
    Timestamp::from_unix_secs(1_700_000_000)
}

fn warehouse_project() -> NewProject {
    NewProject {
        name: "Warehouse move".to_string(),
        description: "Relocate stock to the new site".to_string(),
        planned_end_date: base_time().plus_days(30),
        initial_estimation: TimeEstimation::new(10, 0).unwrap(),
        contact_name: "Dana Field".to_string(),
        contact_email: "dana@example.com".to_string(),
    }
}

/// Plans one project with one task and returns both ids.
async fn planned_task(world: &World) -> (ProjectId, ProjectTaskId) {
    let project_id = world
        .project_service
        .create_project(warehouse_project())
        .await
        .unwrap();
    let task_id = world
        .project_service
        .add_task_to(
            project_id,
            "Pack shelves",
            "Wrap and box the small parts aisle",
            TimeEstimation::new(2, 30).unwrap(),
        )
        .await
        .unwrap();
    (project_id, task_id)
}

// =============================================================================
// Integration Tests
// =============================================================================

/// Tests the complete flow: a planned task is claimed by a team, worked to
/// completion, and the relayed completion event closes out the project.
#[tokio::test]
async fn completed_team_task_completes_the_project() {
    let world = world();
    let (project_id, task_id) = planned_task(&world).await;

    let team_id = world.team_service.create_team("Packers").await.unwrap();
    let member_id = world
        .team_service
        .add_member(team_id, "Robin Vale", "Carpenter")
        .await
        .unwrap();
    let team_task_id = world.team_service.add_task(team_id, task_id).await.unwrap();

    world
        .team_service
        .assign_task(team_id, team_task_id, member_id)
        .await
        .unwrap();
    world
        .team_service
        .mark_task_in_progress(team_id, team_task_id)
        .await
        .unwrap();
    world
        .team_service
        .complete_task(team_id, team_task_id, ActualSpentTime::new(2, 15).unwrap())
        .await
        .unwrap();

    // Task planning and task completion are both waiting in the outbox
    assert_eq!(world.outbox.pending_count().await, 2);

    let dispatched = world.relay.drain_once().await.unwrap();
    assert_eq!(dispatched, 2);
    assert_eq!(world.outbox.pending_count().await, 0);
    assert_eq!(world.bus.event_count(), 2);

    let project = world
        .projects
        .find_by_id(&project_id)
        .await
        .unwrap()
        .unwrap();
    assert!(project.is_completed());
    let snapshot = project.task(task_id).unwrap();
    assert_eq!(
        snapshot.actual_spent_time,
        Some(ActualSpentTime::new(2, 15).unwrap())
    );
}

/// Tests that redelivering an already-applied completion leaves the project
/// as it was instead of failing the consumer.
#[tokio::test]
async fn redelivered_completion_event_is_harmless() {
    let world = world();
    let (project_id, task_id) = planned_task(&world).await;

    let team_id = world.team_service.create_team("Packers").await.unwrap();
    let member_id = world
        .team_service
        .add_member(team_id, "Robin Vale", "Carpenter")
        .await
        .unwrap();
    let team_task_id = world.team_service.add_task(team_id, task_id).await.unwrap();
    world
        .team_service
        .assign_task(team_id, team_task_id, member_id)
        .await
        .unwrap();
    world
        .team_service
        .mark_task_in_progress(team_id, team_task_id)
        .await
        .unwrap();
    world
        .team_service
        .complete_task(team_id, team_task_id, ActualSpentTime::from_minutes(90))
        .await
        .unwrap();

    world.relay.drain_once().await.unwrap();

    // Deliver the completion a second time, straight through the bus
    let completion = world.bus.events_of_type("team.task_completed.v1").remove(0);
    world.bus.publish(completion).await.unwrap();

    let project = world
        .projects
        .find_by_id(&project_id)
        .await
        .unwrap()
        .unwrap();
    assert!(project.is_completed());
}

/// Tests that stale aggregate copies are rejected by the version check.
#[tokio::test]
async fn concurrent_project_edits_collide_on_the_version() {
    let world = world();
    let (project_id, _) = planned_task(&world).await;

    let mut first = world
        .projects
        .find_by_id(&project_id)
        .await
        .unwrap()
        .unwrap();
    let mut second = world
        .projects
        .find_by_id(&project_id)
        .await
        .unwrap()
        .unwrap();

    first
        .add_task(
            ProjectTaskId::new(),
            "Load truck",
            "",
            TimeEstimation::from_minutes(30),
        )
        .unwrap();
    world.projects.save(first).await.unwrap();

    // The second copy still carries the old version
    second
        .add_task(
            ProjectTaskId::new(),
            "Sweep floor",
            "",
            TimeEstimation::from_minutes(15),
        )
        .unwrap();
    let stale = world.projects.save(second).await;

    assert!(matches!(stale, Err(RepositoryError::Conflict { .. })));
}

/// Tests that a planned task can be claimed by at most one team.
#[tokio::test]
async fn planned_task_can_only_be_claimed_once() {
    let world = world();
    let (_, task_id) = planned_task(&world).await;

    let packers = world.team_service.create_team("Packers").await.unwrap();
    let movers = world.team_service.create_team("Movers").await.unwrap();

    world.team_service.add_task(packers, task_id).await.unwrap();
    let second_claim = world.team_service.add_task(movers, task_id).await;

    assert_eq!(second_claim, Err(TeamError::TaskAlreadyAssigned(task_id)));
}

/// Tests that an opted-out contact never fails planning or event delivery.
#[tokio::test]
async fn opted_out_contact_does_not_disturb_the_flow() {
    let world = world();
    world
        .opt_outs
        .opt_out(
            EmailAddress::parse("dana@example.com").unwrap(),
            base_time(),
        )
        .await;

    let _ = planned_task(&world).await;

    let dispatched = world.relay.drain_once().await.unwrap();

    assert_eq!(dispatched, 1);
    assert_eq!(world.outbox.pending_count().await, 0);
    assert_eq!(world.outbox.published_count().await, 1);
    assert!(world.bus.has_event("project.task_added.v1"));
}

/// Tests the relay as a background task: events flow without manual drains
/// and the task stops cleanly on shutdown.
#[tokio::test]
async fn background_relay_carries_events_until_shutdown() {
    let world = world();
    let (project_id, task_id) = planned_task(&world).await;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let relay = world.relay.clone();
    let relay_handle = tokio::spawn(async move { relay.run(shutdown_rx).await });

    let team_id = world.team_service.create_team("Packers").await.unwrap();
    let member_id = world
        .team_service
        .add_member(team_id, "Robin Vale", "Carpenter")
        .await
        .unwrap();
    let team_task_id = world.team_service.add_task(team_id, task_id).await.unwrap();
    world
        .team_service
        .assign_task(team_id, team_task_id, member_id)
        .await
        .unwrap();
    world
        .team_service
        .mark_task_in_progress(team_id, team_task_id)
        .await
        .unwrap();
    world
        .team_service
        .complete_task(team_id, team_task_id, ActualSpentTime::new(1, 45).unwrap())
        .await
        .unwrap();

    // Wait for the relay to carry the completion across
    let mut completed = false;
    for _ in 0..100 {
        let project = world
            .projects
            .find_by_id(&project_id)
            .await
            .unwrap()
            .unwrap();
        if project.is_completed() {
            completed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(completed, "completion never reached the planning side");

    shutdown_tx.send(true).unwrap();
    let result = relay_handle.await.unwrap();
    assert!(result.is_ok());
}
