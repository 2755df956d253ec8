//! Canonical launch defaults.
//!
//! Every field missing from a received payload is filled from here. The
//! defaults are rebuilt per call rather than shared as mutable state.

use serde::de::DeserializeOwned;
use serde_json::Value;
use termrc_config::LaunchConfig;
use tracing::debug;

use super::errors::LaunchError;
use super::types::{LaunchOptions, LaunchType, Location, OsWindowState, StdinSource};

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            window_title: None,
            cwd: None,
            env: Vec::new(),
            var: Vec::new(),
            tab_title: None,
            launch_type: LaunchType::Window,
            keep_focus: false,
            copy_colors: false,
            copy_cmdline: false,
            copy_env: false,
            hold: false,
            location: Location::Default,
            allow_remote_control: false,
            remote_control_password: Vec::new(),
            stdin_source: StdinSource::None,
            stdin_add_formatting: false,
            stdin_add_line_wrap_markers: false,
            spacing: Vec::new(),
            marker: None,
            logo: None,
            logo_position: None,
            logo_alpha: -1.0,
            os_window_title: None,
            os_window_name: None,
            os_window_class: None,
            os_window_state: OsWindowState::Normal,
            always_on_top: false,
            color: Vec::new(),
            watcher: Vec::new(),
        }
    }
}

/// The built-in defaults, equivalent to parsing an empty launch command line.
pub fn canonical_defaults() -> LaunchOptions {
    LaunchOptions::default()
}

/// The built-in defaults with the `[launch]` config overrides applied.
pub fn canonical_defaults_with(config: &LaunchConfig) -> Result<LaunchOptions, LaunchError> {
    let mut opts = canonical_defaults();

    if let Some(value) = config.launch_type.as_deref() {
        opts.launch_type = parse_choice("type", value)?;
    }
    if let Some(value) = config.location.as_deref() {
        opts.location = parse_choice("location", value)?;
    }
    if let Some(value) = config.stdin_source.as_deref() {
        opts.stdin_source = parse_choice("stdin_source", value)?;
    }
    if let Some(value) = config.os_window_state.as_deref() {
        opts.os_window_state = parse_choice("os_window_state", value)?;
    }
    if let Some(cwd) = &config.cwd {
        opts.cwd = Some(cwd.clone());
    }
    if let Some(hold) = config.hold {
        opts.hold = hold;
    }
    if let Some(keep_focus) = config.keep_focus {
        opts.keep_focus = keep_focus;
    }

    debug!(
        event = "core.launch.defaults_resolved",
        launch_type = %opts.launch_type,
        hold = opts.hold,
    );
    Ok(opts)
}

fn parse_choice<T: DeserializeOwned>(field: &str, value: &str) -> Result<T, LaunchError> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|_| {
        LaunchError::InvalidDefault {
            field: field.to_string(),
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use termrc_protocol::{RC_ONLY_FIELDS, launch_schema};

    #[test]
    fn test_canonical_defaults_values() {
        let opts = canonical_defaults();
        assert_eq!(opts.launch_type, LaunchType::Window);
        assert_eq!(opts.location, Location::Default);
        assert_eq!(opts.stdin_source, StdinSource::None);
        assert_eq!(opts.os_window_state, OsWindowState::Normal);
        assert_eq!(opts.logo_alpha, -1.0);
        assert!(!opts.copy_env);
        assert!(opts.window_title.is_none());
        assert!(opts.env.is_empty());
    }

    #[test]
    fn test_defaults_cover_every_launch_field_in_schema() {
        let value = serde_json::to_value(canonical_defaults()).unwrap();
        let map = value.as_object().unwrap();

        let declared: Vec<&str> = launch_schema()
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .filter(|name| !RC_ONLY_FIELDS.contains(name))
            .collect();

        assert_eq!(map.len(), declared.len());
        for name in declared {
            assert!(map.contains_key(name), "default missing for {name}");
        }
    }

    #[test]
    fn test_defaults_satisfy_schema_types() {
        let value = serde_json::to_value(canonical_defaults()).unwrap();
        for (name, default) in value.as_object().unwrap() {
            if default.is_null() || name == "copy_env" {
                continue;
            }
            let decl = launch_schema().get(name).unwrap();
            assert!(decl.type_tag.accepts(default), "{name} = {default}");
        }
    }

    #[test]
    fn test_canonical_defaults_are_fresh_per_call() {
        let mut first = canonical_defaults();
        first.env.push("A=1".to_string());
        assert!(canonical_defaults().env.is_empty());
    }

    #[test]
    fn test_config_overrides_applied() {
        let config = LaunchConfig {
            launch_type: Some("os-window".to_string()),
            location: Some("hsplit".to_string()),
            cwd: Some("/srv".to_string()),
            hold: Some(true),
            stdin_source: Some("@selection".to_string()),
            ..Default::default()
        };
        let opts = canonical_defaults_with(&config).unwrap();
        assert_eq!(opts.launch_type, LaunchType::OsWindow);
        assert_eq!(opts.location, Location::Hsplit);
        assert_eq!(opts.cwd.as_deref(), Some("/srv"));
        assert!(opts.hold);
        assert_eq!(opts.stdin_source, StdinSource::Selection);
        assert!(!opts.keep_focus);
    }

    #[test]
    fn test_config_invalid_choice_rejected() {
        let config = LaunchConfig {
            os_window_state: Some("huge".to_string()),
            ..Default::default()
        };
        let err = canonical_defaults_with(&config).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::InvalidDefault { ref field, ref value }
                if field == "os_window_state" && value == "huge"
        ));
    }
}
