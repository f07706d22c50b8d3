//! Task status lifecycle management.
//!
//! Tasks move forward through `todo`, `in_progress` and `done`. Clients either
//! set any later status through an edit or advance one step at a time. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the status lifecycle in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
