use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use selection_builder::BuilderConfig;
use tracing::{debug, info};

/// Environment variable manager that loads from system and .env files
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file. File values override the process
    /// environment.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars
                .insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/.sift/.env`, read when no env file is given explicitly.
pub fn default_env_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sift/.env"))
}

/// Resolves the builder configuration: process env, then the env file,
/// then the command-line override.
pub fn load_builder_config(
    env_file: Option<&str>,
    max_depth: Option<u64>,
) -> Result<BuilderConfig, CliError> {
    let mut env = EnvManager::new();

    match env_file {
        Some(path) => env.load_from_file(path)?,
        None => {
            if let Some(path) = default_env_file().filter(|p| p.is_file()) {
                env.load_from_file(&path)?;
            }
        }
    }

    let mut config = BuilderConfig::from_vars(env.all());
    if let Some(depth) = max_depth {
        config = config.with_max_depth(depth as usize);
    }

    debug!("Builder configuration: {config:?}");
    Ok(config)
}
