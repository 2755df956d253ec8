//! Configuration types for termrc.
//!
//! ```toml
//! [launch]
//! type = "tab"
//! location = "vsplit"
//! hold = true
//!
//! [remote]
//! no_response = true
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermrcConfig {
    /// Overrides for the canonical `launch` defaults
    #[serde(default)]
    pub launch: LaunchConfig,

    /// Remote-control client behaviour
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Optional overrides layered on top of the canonical launch defaults.
///
/// Every field is optional; an unset field keeps the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    #[serde(rename = "type")]
    pub launch_type: Option<String>,
    pub location: Option<String>,
    pub cwd: Option<String>,
    pub hold: Option<bool>,
    pub keep_focus: Option<bool>,
    pub stdin_source: Option<String>,
    pub os_window_state: Option<String>,
}

impl LaunchConfig {
    /// The choice-valued overrides as `(field name, value)` pairs.
    pub fn choice_overrides(&self) -> Vec<(&'static str, &str)> {
        [
            ("type", self.launch_type.as_deref()),
            ("location", self.location.as_deref()),
            ("stdin_source", self.stdin_source.as_deref()),
            ("os_window_state", self.os_window_state.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Default for `launch --no-response`
    pub no_response: Option<bool>,
}
