use serde::{Deserialize, Serialize};

use crate::payload::Payload;

/// Protocol version stamped on every outgoing command.
pub const PROTOCOL_VERSION: [u32; 3] = [0, 1, 0];

/// Error codes carried in failure responses.
///
/// Unknown codes from newer peers deserialize to `Unknown` via `#[serde(other)]`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownCommand,
    InvalidPayload,
    LaunchFailed,
    ProtocolError,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::UnknownCommand => write!(f, "unknown_command"),
            ErrorCode::InvalidPayload => write!(f, "invalid_payload"),
            ErrorCode::LaunchFailed => write!(f, "launch_failed"),
            ErrorCode::ProtocolError => write!(f, "protocol_error"),
            ErrorCode::Unknown => write!(f, "unknown"),
        }
    }
}

/// Controller → controlled-process command envelope.
///
/// ```json
/// {"cmd": "launch", "version": [0, 1, 0], "payload": {"args": ["mutt"]}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMessage {
    pub cmd: String,
    pub version: [u32; 3],
    /// The sender will not wait for a reply.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_response: bool,
    #[serde(default)]
    pub payload: Payload,
}

impl CommandMessage {
    pub fn new(cmd: impl Into<String>, payload: Payload) -> Self {
        Self {
            cmd: cmd.into(),
            version: PROTOCOL_VERSION,
            no_response: false,
            payload,
        }
    }

    pub fn with_no_response(mut self, no_response: bool) -> Self {
        self.no_response = no_response;
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// Controlled-process → controller reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseMessage {
    pub fn success(data: Option<String>) -> Self {
        Self {
            ok: true,
            data,
            code: None,
            error: None,
        }
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            code: Some(code),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_message_wire_format() {
        let mut payload = Payload::new();
        payload.insert("args", json!(["mutt"]));
        let msg = CommandMessage::new("launch", payload);
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"cmd":"launch","version":[0,1,0],"payload":{"args":["mutt"]}}"#
        );
    }

    #[test]
    fn test_command_message_no_response_serialized_when_set() {
        let msg = CommandMessage::new("launch", Payload::new()).with_no_response(true);
        let json = msg.to_json().unwrap();
        assert!(json.contains(r#""no_response":true"#));
        let parsed = CommandMessage::from_json(&json).unwrap();
        assert!(parsed.no_response);
    }

    #[test]
    fn test_command_message_missing_payload_defaults_empty() {
        let parsed = CommandMessage::from_json(r#"{"cmd":"launch","version":[0,1,0]}"#).unwrap();
        assert!(parsed.payload.is_empty());
        assert!(!parsed.no_response);
    }

    #[test]
    fn test_response_success_omits_error_fields() {
        let resp = ResponseMessage::success(Some("7".to_string()));
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"ok":true,"data":"7"}"#
        );
    }

    #[test]
    fn test_response_failure_roundtrip() {
        let resp = ResponseMessage::failure(ErrorCode::LaunchFailed, "no such cwd");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""code":"launch_failed""#));
        let parsed: ResponseMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resp);
    }

    #[test]
    fn test_error_code_from_newer_peer_is_unknown() {
        let code: ErrorCode = serde_json::from_str(r#""launch_failed""#).unwrap();
        assert_eq!(code, ErrorCode::LaunchFailed);
        let code: ErrorCode = serde_json::from_str(r#""something_new""#).unwrap();
        assert_eq!(code, ErrorCode::Unknown);
    }

    #[test]
    fn test_error_code_display_matches_wire() {
        for code in [
            ErrorCode::UnknownCommand,
            ErrorCode::InvalidPayload,
            ErrorCode::LaunchFailed,
            ErrorCode::ProtocolError,
        ] {
            let wire = serde_json::to_value(&code).unwrap();
            assert_eq!(wire, json!(code.to_string()));
        }
    }
}
