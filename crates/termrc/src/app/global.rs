use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("termrc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and inspect remote-control launch commands for a terminal emulator")
        .long_about("termrc turns launch options into the JSON command message a terminal's remote-control socket accepts, and decodes received messages back into fully-resolved launch options.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
