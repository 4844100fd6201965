//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, events, errors)
//! - `project` - Project planning context: projects and their estimated tasks
//! - `team` - Team execution context: members and the tasks they work on
//! - `consent` - Notification consent records for project contacts

pub mod consent;
pub mod foundation;
pub mod project;
pub mod team;
