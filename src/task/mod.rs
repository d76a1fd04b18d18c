//! Task lifecycle tracking.
//!
//! This module creates task records with store-assigned identifiers, moves
//! them between `todo`, `in_progress`, `completed`, and `cancelled` only when
//! the transition table allows it, and exposes read-only queries and a daily
//! report over the stored tasks. Assignment to a task is restricted to actors
//! listed in the configured user registry. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Registry configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
