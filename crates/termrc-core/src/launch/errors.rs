use termrc_protocol::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Unknown remote command '{cmd}'")]
    UnknownCommand { cmd: String },

    #[error("Invalid launch payload: {message}")]
    InvalidPayload { message: String },

    #[error("Invalid default for '{field}': '{value}'")]
    InvalidDefault { field: String, value: String },

    #[error("Launch failed: {message}")]
    LaunchFailed { message: String },

    #[error("Serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl LaunchError {
    /// The code reported to the remote caller.
    pub fn wire_code(&self) -> ErrorCode {
        match self {
            LaunchError::UnknownCommand { .. } => ErrorCode::UnknownCommand,
            LaunchError::InvalidPayload { .. } => ErrorCode::InvalidPayload,
            LaunchError::LaunchFailed { .. } => ErrorCode::LaunchFailed,
            LaunchError::InvalidDefault { .. } | LaunchError::Serialization { .. } => {
                ErrorCode::ProtocolError
            }
        }
    }
}
