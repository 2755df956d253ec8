//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.termrc/config.toml`
//! 3. **Project config** - `./.termrc/config.toml`
//! 4. **CLI arguments** - Command-line flags (applied by the caller)

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ConfigError;
use crate::paths::TermrcPaths;
use crate::types::{LaunchConfig, RemoteConfig, TermrcConfig};
use crate::validation::validate_config;

/// Load configuration from `~/.termrc` and the current directory.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<TermrcConfig, ConfigError> {
    let paths = TermrcPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load configuration from explicit user paths and project root.
pub fn load_hierarchy_from(
    paths: &TermrcPaths,
    project_root: &Path,
) -> Result<TermrcConfig, ConfigError> {
    let mut config = TermrcConfig::default();

    if let Some(user_config) = load_optional(&paths.user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_optional(&TermrcPaths::project_config(project_root))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    debug!(event = "config.load_completed", config = ?config);
    Ok(config)
}

fn load_optional(path: &Path) -> Result<Option<TermrcConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "config.file_missing", path = %path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<TermrcConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with `override_config` taking precedence field by field.
pub fn merge_configs(base: TermrcConfig, override_config: TermrcConfig) -> TermrcConfig {
    let base_launch = base.launch;
    let over_launch = override_config.launch;
    TermrcConfig {
        launch: LaunchConfig {
            launch_type: over_launch.launch_type.or(base_launch.launch_type),
            location: over_launch.location.or(base_launch.location),
            cwd: over_launch.cwd.or(base_launch.cwd),
            hold: over_launch.hold.or(base_launch.hold),
            keep_focus: over_launch.keep_focus.or(base_launch.keep_focus),
            stdin_source: over_launch.stdin_source.or(base_launch.stdin_source),
            os_window_state: over_launch.os_window_state.or(base_launch.os_window_state),
        },
        remote: RemoteConfig {
            no_response: override_config
                .remote
                .no_response
                .or(base.remote.no_response),
        },
    }
}
