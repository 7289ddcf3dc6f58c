use crate::cli::{GlobalFlags, OutputFormat};
use crate::row::RankedRow;

/// Handle `revq schema`.
///
/// The schema is always JSON; `--format raw` prints it on one line.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render(flags.format)?);
    Ok(())
}

fn render(format: OutputFormat) -> anyhow::Result<String> {
    let schema = schemars::schema_for!(RankedRow);
    Ok(match format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    })
}
