use clap::ArgMatches;
use clap::parser::ValueSource;
use serde_json::{Value, json};
use termrc_core::TermrcError;
use termrc_core::launch::{
    COPY_ENV_FIELD, LaunchError, LaunchOptions, LaunchRcOptions, build_command,
    canonical_defaults_with, decode_payload_against,
};
use termrc_protocol::{Payload, RC_ONLY_FIELDS, TypeTag, launch_schema};
use tracing::{error, info};

use super::load_config_with_warning;

pub(crate) fn handle_launch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();

    let defaults = match canonical_defaults_with(&config.launch) {
        Ok(defaults) => defaults,
        Err(e) => {
            eprintln!("Failed to apply launch defaults from config: {}", e);
            error!(
                event = "cli.launch.defaults_failed",
                error = %e,
                error_code = e.error_code(),
                user_error = e.is_user_error(),
            );
            return Err(e.into());
        }
    };

    let opts = rc_options_from_matches(matches, &defaults, config.no_response())?;
    let args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    info!(
        event = "cli.launch.encode_started",
        launch_type = %opts.launch.launch_type,
        match_expr = ?opts.match_expr,
        args = args.len(),
    );

    let message = match build_command(&opts, &args, std::env::vars()) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("Failed to build launch command: {}", e);
            error!(event = "cli.launch.encode_failed", error = %e);
            return Err(e.into());
        }
    };

    println!("{}", message.to_json()?);

    info!(
        event = "cli.launch.encode_completed",
        fields = message.payload.len(),
        no_response = message.no_response,
    );
    Ok(())
}

/// Build client-side options from the flags given on the command line.
///
/// Only flags the user actually passed are collected; everything else is
/// filled from `defaults` by the same routine the receiving side uses.
fn rc_options_from_matches(
    matches: &ArgMatches,
    defaults: &LaunchOptions,
    no_response_default: bool,
) -> Result<LaunchRcOptions, LaunchError> {
    let mut given = Payload::new();

    for decl in launch_schema().fields() {
        let name = decl.name.as_str();
        if decl.positional || RC_ONLY_FIELDS.contains(&name) {
            continue;
        }
        if matches.value_source(name) != Some(ValueSource::CommandLine) {
            continue;
        }

        // `--copy-env` is a plain switch locally; the list form only exists
        // on the wire.
        let value = if name == COPY_ENV_FIELD {
            Value::Bool(matches.get_flag(name))
        } else {
            match &decl.type_tag {
                TypeTag::Bool => Value::Bool(matches.get_flag(name)),
                TypeTag::Float => matches
                    .get_one::<f64>(name)
                    .map_or(Value::Null, |v| json!(v)),
                TypeTag::ListStr => {
                    let values: Vec<&String> = matches
                        .get_many::<String>(name)
                        .map(|values| values.collect())
                        .unwrap_or_default();
                    json!(values)
                }
                TypeTag::Str | TypeTag::Choices(_) => matches
                    .get_one::<String>(name)
                    .map_or(Value::Null, |v| json!(v)),
            }
        };
        given.insert(name, value);
    }

    let decoded = decode_payload_against(&given, defaults)?;

    Ok(LaunchRcOptions {
        match_expr: matches.get_one::<String>("match").cloned(),
        use_self: matches.get_flag("self"),
        no_response: matches.get_flag("no_response") || no_response_default,
        launch: decoded.options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;
    use termrc_core::launch::{LaunchType, Location, canonical_defaults};

    fn launch_matches(argv: &[&str]) -> ArgMatches {
        let mut full = vec!["termrc", "launch"];
        full.extend_from_slice(argv);
        let matches = build_cli().try_get_matches_from(full).unwrap();
        matches.subcommand_matches("launch").unwrap().clone()
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let matches = launch_matches(&[]);
        let opts = rc_options_from_matches(&matches, &canonical_defaults(), false).unwrap();
        assert_eq!(opts.launch, canonical_defaults());
        assert!(opts.match_expr.is_none());
        assert!(!opts.use_self);
        assert!(!opts.no_response);
    }

    #[test]
    fn test_flags_override_defaults() {
        let matches = launch_matches(&[
            "--type",
            "tab",
            "--title",
            "Email",
            "--env",
            "A=1",
            "--env",
            "B=2",
            "--logo-alpha",
            "-1",
            "--hold",
            "--copy-env",
            "-m",
            "title:mail",
            "--self",
            "mutt",
        ]);
        let opts = rc_options_from_matches(&matches, &canonical_defaults(), false).unwrap();
        assert_eq!(opts.launch.launch_type, LaunchType::Tab);
        assert_eq!(opts.launch.window_title.as_deref(), Some("Email"));
        assert_eq!(opts.launch.env, vec!["A=1", "B=2"]);
        assert_eq!(opts.launch.logo_alpha, -1.0);
        assert!(opts.launch.hold);
        assert!(opts.launch.copy_env);
        assert_eq!(opts.match_expr.as_deref(), Some("title:mail"));
        assert!(opts.use_self);
    }

    #[test]
    fn test_config_defaults_kept_when_flag_absent() {
        let defaults = LaunchOptions {
            location: Location::Vsplit,
            hold: true,
            ..canonical_defaults()
        };
        let matches = launch_matches(&["--location", "hsplit"]);
        let opts = rc_options_from_matches(&matches, &defaults, true).unwrap();
        assert_eq!(opts.launch.location, Location::Hsplit);
        assert!(opts.launch.hold);
        assert!(opts.no_response);
    }
}
