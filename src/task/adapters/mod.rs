//! Storage adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory storage that
//!   owns the identifier counter

pub mod memory;
