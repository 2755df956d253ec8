use std::error::Error;

use termrc_config::ConfigError;

use crate::launch::LaunchError;

/// Base trait for all application errors
pub trait TermrcError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl TermrcError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidChoice { .. } => "CONFIG_INVALID_CHOICE",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::PathError { .. } => "CONFIG_PATH_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidChoice { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl TermrcError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            LaunchError::InvalidPayload { .. } => "INVALID_PAYLOAD",
            LaunchError::InvalidDefault { .. } => "INVALID_DEFAULT",
            LaunchError::LaunchFailed { .. } => "LAUNCH_FAILED",
            LaunchError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            LaunchError::UnknownCommand { .. }
                | LaunchError::InvalidPayload { .. }
                | LaunchError::InvalidDefault { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_codes() {
        let err = LaunchError::LaunchFailed {
            message: "spawn failed".to_string(),
        };
        assert_eq!(err.error_code(), "LAUNCH_FAILED");
        assert!(!err.is_user_error());

        let err = LaunchError::UnknownCommand {
            cmd: "ls".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_COMMAND");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_config_error_codes() {
        let err = ConfigError::InvalidChoice {
            field: "type".to_string(),
            value: "popup".to_string(),
            valid: "window".to_string(),
        };
        assert_eq!(err.error_code(), "CONFIG_INVALID_CHOICE");
        assert!(err.is_user_error());

        let err = ConfigError::IoError {
            source: std::io::Error::other("disk"),
        };
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_boxed_trait_object() {
        let err: Box<dyn TermrcError> = Box::new(LaunchError::InvalidPayload {
            message: "bad".to_string(),
        });
        assert_eq!(err.error_code(), "INVALID_PAYLOAD");
        assert_eq!(err.to_string(), "Invalid launch payload: bad");
    }
}
