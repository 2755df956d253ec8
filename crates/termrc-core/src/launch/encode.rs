use serde_json::{Value, json};
use termrc_protocol::{CommandMessage, Payload, launch_schema};
use tracing::{debug, warn};

use super::errors::LaunchError;
use super::types::LaunchRcOptions;
use super::{COPY_ENV_FIELD, LAUNCH_COMMAND};

/// Encode local options and positional arguments into a wire payload.
///
/// Every option is transmitted verbatim, including those still at their
/// default value. Unset optional strings travel as `null`.
pub fn encode_payload(opts: &LaunchRcOptions, args: &[String]) -> Result<Payload, LaunchError> {
    let Value::Object(mut values) = serde_json::to_value(opts)? else {
        return Err(LaunchError::InvalidPayload {
            message: "launch options did not serialize to an object".to_string(),
        });
    };

    let mut payload = Payload::new();
    payload.insert("args", json!(args));

    for decl in launch_schema().fields() {
        if decl.positional {
            continue;
        }
        if let Some(value) = values.remove(&decl.name) {
            payload.insert(decl.name.clone(), value);
        }
    }
    // Anything left is an attribute the schema does not declare; it still
    // travels so newer receivers can use it.
    for (name, value) in values {
        payload.insert(name, value);
    }

    debug!(
        event = "core.launch.encode_completed",
        fields = payload.len(),
        args = args.len(),
    );
    Ok(payload)
}

/// Like [`encode_payload`], then applies the schema's encode-time hooks.
///
/// `copy_local_env` replaces a `true` `copy_env` with the issuing process's
/// environment as sorted `KEY=VALUE` strings and a `false` one with `null`.
pub fn encode_payload_with_env<I, K, V>(
    opts: &LaunchRcOptions,
    args: &[String],
    local_env: I,
) -> Result<Payload, LaunchError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut payload = encode_payload(opts, args)?;
    let local_env: Vec<(String, String)> = local_env
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    for decl in launch_schema().fields() {
        let Some(hook) = decl.encode_hook.as_deref() else {
            continue;
        };
        match (hook, decl.name.as_str()) {
            ("copy_local_env", COPY_ENV_FIELD) => {
                let value = copy_local_env(opts.launch.copy_env, &local_env);
                payload.insert(decl.name.clone(), value);
            }
            _ => {
                warn!(
                    event = "core.launch.encode_hook_unknown",
                    field = %decl.name,
                    hook = hook,
                );
            }
        }
    }

    Ok(payload)
}

fn copy_local_env(copy: bool, local_env: &[(String, String)]) -> Value {
    if !copy {
        return Value::Null;
    }
    let mut entries: Vec<String> = local_env
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    entries.sort();
    json!(entries)
}

/// Build the complete `launch` command message, applying encode hooks
/// against `local_env`.
pub fn build_command<I, K, V>(
    opts: &LaunchRcOptions,
    args: &[String],
    local_env: I,
) -> Result<CommandMessage, LaunchError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let payload = encode_payload_with_env(opts, args, local_env)?;
    Ok(CommandMessage::new(LAUNCH_COMMAND, payload).with_no_response(opts.no_response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::types::LaunchType;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test]
    fn test_args_default_to_empty_list() {
        let payload = encode_payload(&LaunchRcOptions::default(), &[]).unwrap();
        assert_eq!(payload.as_map()["args"], json!([]));
    }

    #[test]
    fn test_every_field_transmitted_including_defaults() {
        let payload = encode_payload(&LaunchRcOptions::default(), &[]).unwrap();
        for decl in launch_schema().fields() {
            assert!(
                payload.as_map().contains_key(&decl.name),
                "{} not transmitted",
                decl.name
            );
        }
        assert_eq!(payload.as_map()["type"], json!("window"));
        assert_eq!(payload.as_map()["hold"], json!(false));
        assert_eq!(payload.as_map()["logo_alpha"], json!(-1.0));
        assert_eq!(payload.as_map()["window_title"], Value::Null);
    }

    #[test]
    fn test_values_are_verbatim() {
        let mut opts = LaunchRcOptions {
            match_expr: Some("title:mail".to_string()),
            no_response: true,
            ..Default::default()
        };
        opts.launch.window_title = Some("Email".to_string());
        opts.launch.launch_type = LaunchType::Tab;
        opts.launch.copy_env = true;
        opts.launch.env = vec!["A=1".to_string()];

        let args = vec!["mutt".to_string()];
        let payload = encode_payload(&opts, &args).unwrap();
        let map = payload.as_map();
        assert_eq!(map["args"], json!(["mutt"]));
        assert_eq!(map["match"], json!("title:mail"));
        assert_eq!(map["no_response"], json!(true));
        assert_eq!(map["window_title"], json!("Email"));
        assert_eq!(map["type"], json!("tab"));
        assert_eq!(map["copy_env"], json!(true));
        assert_eq!(map["env"], json!(["A=1"]));
    }

    #[test]
    fn test_copy_local_env_hook_sends_environment() {
        let mut opts = LaunchRcOptions::default();
        opts.launch.copy_env = true;
        let env = vec![("PATH", "/bin"), ("HOME", "/root")];

        let payload = encode_payload_with_env(&opts, &[], env).unwrap();
        assert_eq!(payload.as_map()["copy_env"], json!(["HOME=/root", "PATH=/bin"]));
    }

    #[test]
    fn test_copy_local_env_hook_drops_false() {
        let opts = LaunchRcOptions::default();
        let payload = encode_payload_with_env(&opts, &[], vec![("PATH", "/bin")]).unwrap();
        assert_eq!(payload.as_map()["copy_env"], Value::Null);
        assert!(payload.get("copy_env").is_none());
    }

    #[test]
    fn test_build_command_carries_no_response() {
        let opts = LaunchRcOptions {
            no_response: true,
            ..Default::default()
        };
        let msg = build_command(&opts, &["htop".to_string()], no_env()).unwrap();
        assert_eq!(msg.cmd, "launch");
        assert!(msg.no_response);
        assert_eq!(msg.payload.args(), vec!["htop"]);
    }
}
