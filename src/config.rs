//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dirtree/dirtree.toml`
//! 3. Environment variable: `STATE_RECONSTRUCTION_FILE`
//! 4. Command line: `--state-file` (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// File name used for the reconstruction script when nothing overrides it.
pub const DEFAULT_STATE_FILE: &str = "state";

/// Environment variable naming the reconstruction script file.
pub const STATE_FILE_ENV: &str = "STATE_RECONSTRUCTION_FILE";

/// Unified configuration for dirtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the reconstruction script is written when stdin closes
    pub state_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

/// Get the XDG config directory for dirtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dirtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dirtree.toml"))
}

impl Settings {
    /// Load settings from defaults, the global config file, and the environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` in place of the global config.
    ///
    /// A missing file is skipped; a malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "state_file",
                defaults.state_file.to_string_lossy().to_string(),
            )
            .map_err(config_err)?;

        if let Some(path) = config_file {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings = Self::apply_env_overrides(settings)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    /// Apply `STATE_RECONSTRUCTION_FILE` as an explicit override.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // The prefix consumes "STATE_", leaving the key "reconstruction_file".
        let config = Config::builder()
            .add_source(Environment::with_prefix("STATE"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("reconstruction_file") {
            if !val.is_empty() {
                settings.state_file = PathBuf::from(val);
            }
        }

        Ok(settings)
    }

    /// Override the state file, e.g. from a command line flag.
    pub fn with_state_file(mut self, state_file: Option<PathBuf>) -> Self {
        if let Some(path) = state_file {
            self.state_file = path;
            self.expand_paths();
        }
        self
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax. Unknown variables leave the
    /// path untouched.
    fn expand_paths(&mut self) {
        let raw = self.state_file.to_string_lossy().to_string();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.state_file = PathBuf::from(expanded.as_ref());
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_state_file_is_state() {
        assert_eq!(Settings::default().state_file, PathBuf::from("state"));
    }

    #[test]
    fn given_tilde_in_state_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            state_file: PathBuf::from("~/dirtree.state"),
        };
        settings.expand_paths();

        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .expect("home dir");
        assert_eq!(settings.state_file, home.join("dirtree.state"));
    }

    #[test]
    fn given_cli_override_when_with_state_file_then_replaces_configured() {
        let settings = Settings::default().with_state_file(Some(PathBuf::from("snapshot")));
        assert_eq!(settings.state_file, PathBuf::from("snapshot"));
    }

    #[test]
    fn given_no_override_when_with_state_file_then_keeps_configured() {
        let settings = Settings {
            state_file: PathBuf::from("kept"),
        }
        .with_state_file(None);
        assert_eq!(settings.state_file, PathBuf::from("kept"));
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_state_file() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("state_file = \"state\""));
    }
}
