//! One-shot lookup for scripts: resolve a single query and write it out.

use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

use crate::api::{Record, RecordSource};
use crate::config::LookupConfig;
use crate::lookup::{
    display_name, stat_bar, stat_label, type_color, LookupController, LookupSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<JsonRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    type_colors: Vec<&'static str>,
}

/// Look up `query` through the controller and write the result to `out`.
///
/// Returns `Ok(true)` when a record was found.
pub async fn run_once<W: Write>(
    source: Arc<dyn RecordSource>,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<bool> {
    let config = LookupConfig {
        initial_query: query.to_string(),
        ..LookupConfig::default()
    };
    let (mut controller, mut resolutions) = LookupController::new(source, &config);
    controller.mount();

    let resolution = resolutions
        .recv()
        .await
        .ok_or_else(|| io::Error::other("lookup task ended without a result"))?;
    controller.apply(resolution);

    let snapshot = controller.snapshot();
    match format {
        OutputFormat::Text => write_text(&snapshot, out)?,
        OutputFormat::Json => write_json(&snapshot, out)?,
    }
    Ok(snapshot.record.is_some())
}

fn write_text<W: Write>(snapshot: &LookupSnapshot, out: &mut W) -> io::Result<()> {
    if let Some(error) = &snapshot.error {
        writeln!(out, "{}", error)?;
        return Ok(());
    }
    let Some(record) = &snapshot.record else {
        return Ok(());
    };

    writeln!(out, "{}", display_name(&record.name))?;
    if !record.image_url.is_empty() {
        writeln!(out, "Sprite: {}", record.image_url)?;
    }
    writeln!(out, "Types: {}", record.types.join(", "))?;
    writeln!(out, "Base Stats")?;
    for stat in &record.stats {
        writeln!(
            out,
            "  {:<16}{:>4} {}",
            stat_label(&stat.name),
            stat.base_value,
            stat_bar(stat.base_value, 20)
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(snapshot: &LookupSnapshot, out: &mut W) -> io::Result<()> {
    let output = JsonOutput {
        query: &snapshot.query,
        record: snapshot.record.as_ref().map(|record| JsonRecord {
            record,
            type_colors: record
                .types
                .iter()
                .map(|name| type_color(name).token())
                .collect(),
        }),
        error: snapshot.error.as_deref(),
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}
