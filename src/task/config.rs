//! Tracker configuration.
//!
//! The only value the tracker consumes from its environment is the list of
//! known actors. Hosts may build [`TrackerConfig`] directly or deserialize it
//! from JSON.
//!
//! # Examples
//!
//! ```
//! use tasktrack::task::config::TrackerConfig;
//! use tasktrack::task::domain::ActorName;
//!
//! let config = TrackerConfig::from_json_str(r#"{ "users": ["Alice", "Bob"] }"#)
//!     .expect("valid configuration");
//! let registry = config.user_registry();
//! assert!(registry.contains(&ActorName::from("Alice")));
//! assert_eq!(registry.len(), 2);
//! ```

use crate::task::domain::UserRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`TrackerConfig`].
    #[error("invalid tracker configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration supplied once when a tracker is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Actor names accepted as task assignees.
    #[serde(default)]
    pub users: Vec<String>,
}

impl TrackerConfig {
    /// Creates a configuration with the given actors.
    #[must_use]
    pub fn with_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is malformed or contains
    /// unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the immutable user registry described by this configuration.
    #[must_use]
    pub fn user_registry(&self) -> UserRegistry {
        UserRegistry::new(self.users.iter().map(String::as_str))
    }
}
