use std::collections::HashMap;

use serde_json::{Map, Value};
use termrc_protocol::{Payload, is_truthy, launch_schema};
use tracing::{debug, warn};

use super::COPY_ENV_FIELD;
use super::defaults::canonical_defaults;
use super::errors::LaunchError;
use super::types::{CopyEnv, LaunchOptions};

/// A payload rebuilt into typed launch options.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLaunch {
    pub options: LaunchOptions,
    pub args: Vec<String>,
    pub copy_env: CopyEnv,
}

impl DecodedLaunch {
    /// Environment overrides to seed the new process with, if the payload
    /// carried a `KEY=VALUE` list.
    pub fn base_env(&self) -> Option<&HashMap<String, String>> {
        self.copy_env.base_env()
    }
}

impl CopyEnv {
    /// Decide the variant from the wire shape of `copy_env`.
    ///
    /// A non-empty list becomes overrides (split on the first `=`, missing
    /// `=` gives an empty value), a boolean is taken as-is, and anything
    /// absent, empty or falsy is `Neither`.
    pub fn from_wire(value: Option<&Value>) -> Self {
        let Some(value) = value.filter(|v| is_truthy(v)) else {
            return CopyEnv::Neither;
        };

        match value {
            Value::Array(items) => {
                let mut env = HashMap::new();
                for item in items {
                    let Some(entry) = item.as_str() else {
                        warn!(event = "core.launch.copy_env_entry_skipped", entry = %item);
                        continue;
                    };
                    let (key, val) = entry.split_once('=').unwrap_or((entry, ""));
                    env.insert(key.to_string(), val.to_string());
                }
                CopyEnv::EnvironmentOverrides(env)
            }
            Value::Bool(b) => CopyEnv::FullEnvironmentCopy(*b),
            other => {
                warn!(event = "core.launch.copy_env_unrecognized", value = %other);
                CopyEnv::Neither
            }
        }
    }
}

/// Decode a payload against freshly built canonical defaults.
pub fn decode_payload(payload: &Payload) -> Result<DecodedLaunch, LaunchError> {
    decode_payload_against(payload, &canonical_defaults())
}

/// Decode a payload, filling absent fields from `defaults`.
///
/// Present fields are taken as sent when their wire shape matches the
/// schema. A field whose shape does not match is rejected and gets the
/// receiver's default from `defaults` instead; this is the only case where
/// a sent value is not passed through, and it is logged as
/// `core.launch.decode_field_rejected`. Fields the receiver does not know
/// are ignored.
pub fn decode_payload_against(
    payload: &Payload,
    defaults: &LaunchOptions,
) -> Result<DecodedLaunch, LaunchError> {
    debug!(event = "core.launch.decode_started", fields = payload.len());

    let Value::Object(default_values) = serde_json::to_value(defaults)? else {
        return Err(LaunchError::InvalidPayload {
            message: "launch defaults did not serialize to an object".to_string(),
        });
    };

    let schema = launch_schema();
    let mut values = Map::new();

    for (name, default_value) in default_values {
        if name == COPY_ENV_FIELD {
            continue;
        }
        let value = match (payload.get(&name), schema.get(&name)) {
            (None, _) => default_value,
            (Some(wire), Some(decl)) if !decl.type_tag.accepts(wire) => {
                warn!(
                    event = "core.launch.decode_field_rejected",
                    field = %name,
                    expected = %decl.type_tag.label(),
                    value = %wire,
                );
                default_value
            }
            (Some(wire), _) => wire.clone(),
        };
        values.insert(name, value);
    }

    let copy_env = CopyEnv::from_wire(payload.get(COPY_ENV_FIELD));
    values.insert(
        COPY_ENV_FIELD.to_string(),
        Value::Bool(copy_env.copies_full_environment()),
    );

    let options: LaunchOptions =
        serde_json::from_value(Value::Object(values)).map_err(|e| LaunchError::InvalidPayload {
            message: e.to_string(),
        })?;
    let args = payload.args();

    debug!(
        event = "core.launch.decode_completed",
        launch_type = %options.launch_type,
        args = args.len(),
        copy_env = options.copy_env,
        base_env = ?copy_env.base_env().map(|env| env.len()),
    );

    Ok(DecodedLaunch {
        options,
        args,
        copy_env,
    })
}
