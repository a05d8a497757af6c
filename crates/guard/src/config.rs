//! Guard configuration

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Configuration for a [`Guard`](crate::Guard).
///
/// # Examples
///
/// ```
/// use nebula_guard::GuardConfig;
///
/// let config: GuardConfig = serde_json::from_str(r#"{ "cache_capacity": 256 }"#).unwrap();
/// assert_eq!(config.cache_capacity.map(|c| c.get()), Some(256));
/// assert!(config.log_failures);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Maximum number of cached call sites. `None` keeps every call site for
    /// the lifetime of the guard.
    pub cache_capacity: Option<NonZeroUsize>,

    /// Emit a `debug` event for every rejected argument.
    pub log_failures: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            cache_capacity: None,
            log_failures: true,
        }
    }
}

impl GuardConfig {
    /// Creates the default configuration: unbounded cache, failures logged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the call-site cache to `capacity` entries.
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Enables or disables failure logging.
    pub fn with_log_failures(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }
}
