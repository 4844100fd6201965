//! taskbridge - Work-item tracking across planning and execution contexts.
//!
//! Runs the complete wiring end to end on in-memory adapters: a project is
//! planned, a team claims and completes the work, and the outbox relay
//! carries the events that keep both sides consistent.
//!
//! Run with: cargo run

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskbridge::adapters::{
    InMemoryEventBus, InMemoryOutbox, InMemoryProjectRepository, InMemoryTeamRepository,
    OptOutList, OutboxRelay, OutboxRelayConfig, SystemClock, UuidIdSource,
};
use taskbridge::application::{
    CompleteProjectTaskOnTeamTaskCompleted, NewProject, NotifyContactOnTaskAdded, ProjectService,
    TeamService,
};
use taskbridge::config::{AppConfig, LogConfig};
use taskbridge::domain::foundation::{ActualSpentTime, TimeEstimation};
use taskbridge::ports::{Clock, EventSubscriber, ProjectRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.log);

    // Shared infrastructure
    let projects = Arc::new(InMemoryProjectRepository::new());
    let teams = Arc::new(InMemoryTeamRepository::new());
    let ids = Arc::new(UuidIdSource::new());
    let clock = Arc::new(SystemClock::new());
    let outbox = Arc::new(InMemoryOutbox::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let opt_outs = Arc::new(OptOutList::new());

    // Consumers sit behind the bus; the relay feeds them from the outbox
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

    let relay_config = OutboxRelayConfig::default()
        .with_poll_interval(config.relay.poll_interval())
        .with_batch_size(config.relay.batch_size);
    let relay = OutboxRelay::with_config(outbox.clone(), bus.clone(), relay_config);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let relay_handle = tokio::spawn(async move { relay.run(shutdown_rx).await });

    let project_service = ProjectService::new(
        projects.clone(),
        ids.clone(),
        clock.clone(),
        outbox.clone(),
    );
    let team_service = TeamService::new(
        teams.clone(),
        projects.clone(),
        ids.clone(),
        clock.clone(),
        outbox.clone(),
    );

    // Plan a project
    info!("Planning a project");
    let project_id = project_service
        .create_project(NewProject {
            name: "Warehouse move".to_string(),
            description: "Relocate stock to the new site".to_string(),
            planned_end_date: clock.now().plus_days(30),
            initial_estimation: TimeEstimation::new(10, 0)?,
            contact_name: "Dana Field".to_string(),
            contact_email: "dana@example.com".to_string(),
        })
        .await?;
    let task_id = project_service
        .add_task_to(
            project_id,
            "Pack shelves",
            "Wrap and box the small parts aisle",
            TimeEstimation::new(2, 30)?,
        )
        .await?;

    // Staff a team and let it claim the planned task
    info!("Staffing a team");
    let team_id = team_service.create_team("Packers").await?;
    let member_id = team_service
        .add_member(team_id, "Robin Vale", "Carpenter")
        .await?;
    let team_task_id = team_service.add_task(team_id, task_id).await?;

    // Work the task to completion
    info!("Working the task");
    team_service
        .assign_task(team_id, team_task_id, member_id)
        .await?;
    team_service
        .mark_task_in_progress(team_id, team_task_id)
        .await?;
    team_service
        .complete_task(team_id, team_task_id, ActualSpentTime::new(2, 15)?)
        .await?;

    // The completion report travels through the outbox; give the relay a
    // moment to carry it across.
    let mut completed = false;
    for _ in 0..50 {
        if let Some(project) = projects.find_by_id(&project_id).await? {
            if project.is_completed() {
                completed = true;
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    if completed {
        info!(project_id = %project_id, "Completion reached the planning side");
    } else {
        warn!(project_id = %project_id, "Completion did not reach the planning side in time");
    }

    shutdown_tx.send(true)?;
    relay_handle.await??;

    Ok(())
}

fn init_tracing(config: &LogConfig) {
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
