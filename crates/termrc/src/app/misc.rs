use clap::{Arg, ArgAction, Command};

pub fn decode_command() -> Command {
    Command::new("decode")
        .about("Decode a launch command message into resolved options")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read the message from this file instead of stdin")
                .value_name("PATH"),
        )
}

pub fn schema_command() -> Command {
    Command::new("schema")
        .about("Show every field the launch command accepts")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
