use std::collections::BTreeMap;
use std::io::Read;

use clap::ArgMatches;
use serde::Serialize;
use termrc_core::TermrcError;
use termrc_core::launch::{DecodedLaunch, LAUNCH_COMMAND, LaunchOptions, decode_payload};
use termrc_protocol::CommandMessage;
use tracing::{error, info};

/// What `termrc decode` prints.
#[derive(Debug, Serialize)]
struct DecodedOutput {
    options: LaunchOptions,
    args: Vec<String>,
    /// Sorted for stable output.
    base_env: Option<BTreeMap<String, String>>,
    #[serde(rename = "match")]
    match_expr: Option<String>,
    #[serde(rename = "self")]
    use_self: bool,
    no_response: bool,
}

impl DecodedOutput {
    fn new(message: &CommandMessage, decoded: DecodedLaunch) -> Self {
        let base_env = decoded
            .base_env()
            .map(|env| env.iter().map(|(k, v)| (k.clone(), v.clone())).collect());
        Self {
            base_env,
            options: decoded.options,
            args: decoded.args,
            match_expr: message.payload.get_str("match").map(String::from),
            use_self: message.payload.flag("self"),
            no_response: message.no_response || message.payload.flag("no_response"),
        }
    }
}

pub(crate) fn handle_decode_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches.get_one::<String>("file");
    info!(event = "cli.decode_started", file = ?file);

    let input = match read_input(file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read command message: {}", e);
            error!(event = "cli.decode_failed", error = %e);
            return Err(e.into());
        }
    };

    let message = match CommandMessage::from_json(&input) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("Invalid command message: {}", e);
            error!(event = "cli.decode_failed", error = %e);
            return Err(e.into());
        }
    };

    if message.cmd != LAUNCH_COMMAND {
        eprintln!("Unsupported command '{}': only 'launch' can be decoded", message.cmd);
        error!(event = "cli.decode_failed", cmd = %message.cmd, error = "unknown_command");
        return Err(format!("Unsupported command '{}'", message.cmd).into());
    }

    let decoded = match decode_payload(&message.payload) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("Failed to decode payload: {}", e);
            error!(
                event = "cli.decode_failed",
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    let output = DecodedOutput::new(&message, decoded);
    println!("{}", serde_json::to_string_pretty(&output)?);

    info!(
        event = "cli.decode_completed",
        launch_type = %output.options.launch_type,
        args = output.args.len(),
    );
    Ok(())
}

fn read_input(file: Option<&String>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
