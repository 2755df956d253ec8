//! Configuration validation logic.

use termrc_protocol::launch_schema;

use crate::errors::ConfigError;
use crate::types::TermrcConfig;

/// Validate a `TermrcConfig`.
///
/// Choice-valued launch overrides must be one of the values the `launch`
/// schema declares for that field.
pub fn validate_config(config: &TermrcConfig) -> Result<(), ConfigError> {
    let schema = launch_schema();

    for (field, value) in config.launch.choice_overrides() {
        let choices = schema
            .get(field)
            .and_then(|decl| decl.choices())
            .ok_or_else(|| ConfigError::InvalidConfiguration {
                message: format!("'{}' is not a choice field in the launch schema", field),
            })?;

        if !choices.iter().any(|c| c == value) {
            return Err(ConfigError::InvalidChoice {
                field: field.to_string(),
                value: value.to_string(),
                valid: choices.join(", "),
            });
        }
    }

    if let Some(cwd) = config.launch.cwd.as_deref()
        && cwd.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "launch.cwd cannot be empty".to_string(),
        });
    }

    Ok(())
}
