//! Taskbridge - Work-Item Tracking Across Two Contexts
//!
//! This crate tracks work items through a planning side (projects with
//! time-estimated tasks) and an execution side (teams that claim, assign
//! and complete those tasks), kept consistent through domain events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
