//! Registry of actors allowed to appear in status payloads.

use super::ActorName;
use std::collections::BTreeSet;

/// Fixed set of known actor names.
///
/// The registry is supplied once when the tracker is assembled and is never
/// mutated afterwards; share it through `Arc` rather than cloning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: BTreeSet<ActorName>,
}

impl UserRegistry {
    /// Creates a registry from any collection of names.
    ///
    /// Duplicate names collapse into a single entry.
    #[must_use]
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ActorName>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when `name` is a registered actor.
    #[must_use]
    pub fn contains(&self, name: &ActorName) -> bool {
        self.users.contains(name)
    }

    /// Returns the number of registered actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when no actors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates registered actors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorName> {
        self.users.iter()
    }
}
