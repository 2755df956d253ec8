use clap::ArgMatches;
use serde_json::json;
use termrc_protocol::launch_schema;
use tracing::info;

pub(crate) fn handle_schema_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let schema = launch_schema();

    if json_output {
        let fields: Vec<serde_json::Value> = schema
            .fields()
            .iter()
            .map(|f| {
                json!({
                    "name": f.name,
                    "type": f.type_tag.label(),
                    "repeated": f.repeated,
                    "positional": f.positional,
                    "encode_hook": f.encode_hook,
                    "description": f.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        print!("{}", schema.help_text());
    }

    info!(
        event = "cli.schema_completed",
        fields = schema.fields().len(),
        json_output = json_output
    );
    Ok(())
}
