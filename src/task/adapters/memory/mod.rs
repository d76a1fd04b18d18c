//! In-memory adapter implementations.
//!
//! These adapters keep all state in process memory and are suitable for
//! embedding and for tests without external dependencies.

mod task;

pub use task::InMemoryTaskRepository;
