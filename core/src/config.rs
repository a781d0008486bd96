//! Store configuration.

use serde::{Deserialize, Serialize};

/// Environment variable read by [`StoreConfig::from_env`].
pub const ENV_INITIAL_CAPACITY: &str = "SHOPPING_LIST_INITIAL_CAPACITY";

const DEFAULT_INITIAL_CAPACITY: usize = 5;

/// Tunables for a [`Store`](crate::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of items the store can hold before its backing storage grows.
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Build a config from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_INITIAL_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.initial_capacity = capacity,
                Err(err) => tracing::warn!(
                    value = %raw,
                    error = %err,
                    "ignoring invalid {}",
                    ENV_INITIAL_CAPACITY
                ),
            }
        }
        config
    }
}
