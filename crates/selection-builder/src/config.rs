use std::collections::HashMap;
use tracing::warn;

/// Environment variable overriding [`BuilderConfig::max_depth`].
pub const MAX_DEPTH_VAR: &str = "SIFT_MAX_FILTER_DEPTH";

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings for the selection builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Deepest allowed filter nesting; the top-level row list is level 1.
    pub max_depth: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuilderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reads overrides from a set of environment variables.
    ///
    /// Unparsable or zero values are ignored with a warning.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = vars.get(MAX_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(0) => warn!("{MAX_DEPTH_VAR} must be at least 1, using {DEFAULT_MAX_DEPTH}"),
                Ok(depth) => config.max_depth = depth,
                Err(e) => warn!(
                    "Ignoring invalid {MAX_DEPTH_VAR}='{raw}': {e}, using {DEFAULT_MAX_DEPTH}"
                ),
            }
        }

        config
    }
}
