//! Configuration for Entropy Election Subsystem

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment override for [`ElectionConfig::max_candidates`].
pub const ENV_MAX_CANDIDATES: &str = "QC_ELECTION_MAX_CANDIDATES";
/// Environment override for [`ElectionConfig::warn_on_collision`].
pub const ENV_WARN_ON_COLLISION: &str = "QC_ELECTION_WARN_ON_COLLISION";

/// Election configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionConfig {
    /// Optional cap on distinct candidate keys per ordering request
    pub max_candidates: Option<usize>,
    /// Emit a warning when two candidate keys share a digest
    pub warn_on_collision: bool,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            max_candidates: None,
            warn_on_collision: true,
        }
    }
}

impl ElectionConfig {
    /// Defaults, overridden from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Unparsable values are ignored and the current value kept.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_CANDIDATES) {
            match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => {
                    self.max_candidates = Some(max);
                    info!(max_candidates = max, "Loaded candidate limit from environment");
                }
                _ => warn!(var = ENV_MAX_CANDIDATES, value = %raw, "Ignoring invalid candidate limit"),
            }
        }

        if let Some(raw) = lookup(ENV_WARN_ON_COLLISION) {
            match raw.trim().parse::<bool>() {
                Ok(flag) => self.warn_on_collision = flag,
                Err(_) => warn!(var = ENV_WARN_ON_COLLISION, value = %raw, "Ignoring invalid collision flag"),
            }
        }

        self
    }
}
