use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::row::RankedRow;
use crate::ui;

pub mod table;

/// Scores at or above this are highlighted in colored tables.
const HIGHLIGHT_SCORE: f64 = revq_score::signals::urgency::URGENCY_SCORE;

const RANK_HEADERS: [&str; 5] = ["rank", "score", "project", "title", "url"];
const SIGNAL_HEADERS: [&str; 5] = ["urgency", "mention", "age", "diff", "commit"];

/// Render a serializable value to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable value in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render ranked rows: a pretty JSON array, one JSON object per line, or a
/// table with fixed columns (plus one column per signal when `explain`).
pub fn render_rows(
    rows: &[RankedRow],
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Raw => to_ndjson(rows),
        OutputFormat::Table => Ok(rows_table(rows, explain)),
    }
}

fn to_ndjson(rows: &[RankedRow]) -> anyhow::Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}

fn rows_table(rows: &[RankedRow], explain: bool) -> String {
    if rows.is_empty() {
        return String::from("(nothing to review)");
    }

    let mut headers = RANK_HEADERS.to_vec();
    if explain {
        headers.extend(SIGNAL_HEADERS);
    }

    let cells = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.rank.to_string(),
                format!("{:.2}", row.score),
                row.project.clone(),
                row.title.clone(),
                row.url.clone(),
            ];
            if let Some(signals) = row.signals.filter(|_| explain) {
                cells.extend(
                    [
                        signals.urgency,
                        signals.mention,
                        signals.age,
                        signals.diff,
                        signals.commit,
                    ]
                    .map(|value| format!("{value:.2}")),
                );
            }
            cells
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &cells, table_options(), Some(HIGHLIGHT_SCORE))
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become a two-column table keyed by dotted path.
fn render_key_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let mut entries = Vec::new();
    flatten("", &value, &mut entries);
    let rows = entries
        .into_iter()
        .map(|(key, value)| vec![key, value])
        .collect::<Vec<_>>();
    Ok(table::render_table(
        &["key", "value"],
        &rows,
        table_options(),
        None,
    ))
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        other => out.push((prefix.to_string(), value_to_cell(other))),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
