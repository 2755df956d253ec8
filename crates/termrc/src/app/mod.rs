mod global;
mod launch;
mod misc;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(launch::launch_command())
        .subcommand(misc::decode_command())
        .subcommand(misc::schema_command())
}
