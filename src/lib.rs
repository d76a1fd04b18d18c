//! Tasktrack: in-memory task lifecycle tracking.
//!
//! This crate tracks tasks through a fixed status lifecycle, validates every
//! status change against an auditable transition table, and answers
//! read-only queries and daily reports over the current task set.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure lifecycle rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task creation, status transitions, queries, and reporting

pub mod task;
