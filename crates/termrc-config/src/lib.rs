//! # termrc-config
//!
//! TOML configuration types, loading, validation, and path layout for termrc.
//!
//! Single source of truth for `TermrcConfig` and `TermrcPaths`.
//! Depends only on `termrc-protocol` (for choice validation).

mod loading;
mod validation;

pub mod errors;
pub mod paths;
pub mod types;

pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, load_hierarchy_from, merge_configs};
pub use paths::{PathError, TermrcPaths};
pub use types::{LaunchConfig, RemoteConfig, TermrcConfig};
pub use validation::validate_config;

impl TermrcConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Whether `launch` should suppress the new window id by default.
    pub fn no_response(&self) -> bool {
        self.remote.no_response.unwrap_or(false)
    }
}
