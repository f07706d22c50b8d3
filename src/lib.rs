//! Taskboard: task tracking with a forward-only status lifecycle.
//!
//! Tasks move through `todo`, `in_progress` and `done`, never backwards.
//! The crate exposes the lifecycle rules, a persistence port with in-memory
//! and SQLite adapters, and an HTTP resource API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Status lifecycle, task aggregate, repositories and services
//! - [`api`]: Axum router exposing tasks over HTTP
//! - [`config`]: Layered configuration
//! - [`telemetry`]: `tracing` subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
