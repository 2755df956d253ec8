use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};
use termrc_protocol::{FieldDecl, TypeTag, launch_schema};

/// Fields whose flags are declared by hand rather than from the schema.
const HAND_WRITTEN: [&str; 2] = ["match", "copy_env"];

pub fn launch_command() -> Command {
    let mut command = Command::new("launch")
        .about("Build a launch command message for a new window, tab or process")
        .arg(
            Arg::new("match")
                .long("match")
                .short('m')
                .help("The tab to open the new window in")
                .value_name("EXPR"),
        )
        .arg(
            Arg::new("copy_env")
                .long("copy-env")
                .help("Send this process's environment for the new window to use")
                .action(ArgAction::SetTrue),
        );

    for decl in launch_schema().fields() {
        if decl.positional || HAND_WRITTEN.contains(&decl.name.as_str()) {
            continue;
        }
        command = command.arg(field_arg(decl));
    }

    command.arg(
        Arg::new("args")
            .help("Command line to run; empty runs the default shell")
            .value_name("CMD")
            .num_args(0..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true),
    )
}

/// A flag generated from a field declaration. The arg id is the wire name.
fn field_arg(decl: &FieldDecl) -> Arg {
    let arg = Arg::new(decl.name.clone())
        .long(decl.flag_name())
        .help(decl.description.clone());

    let arg = match &decl.type_tag {
        TypeTag::Bool => arg.action(ArgAction::SetTrue),
        TypeTag::ListStr => arg.action(ArgAction::Append).value_name("VALUE"),
        TypeTag::Float => arg
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true)
            .value_name("FLOAT"),
        TypeTag::Choices(choices) => arg.value_parser(PossibleValuesParser::new(choices.clone())),
        TypeTag::Str => arg.value_name("TEXT"),
    };

    if decl.name == "window_title" {
        arg.visible_alias("title")
    } else {
        arg
    }
}
