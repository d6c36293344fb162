//! Export command handler.
//!
//! Runs the full pipeline and writes one cleaned themed table to a file
//! as CSV or JSON.

use std::fs::File;
use std::path::Path;

use anyhow::Result;

use dqsus_core::{TableData, ThemedTable};

use crate::bootstrap::CliContext;
use crate::commands::ExportFormat;
use crate::pipeline::{self, PipelineArgs};

/// Execute the export command.
///
/// # Errors
///
/// Fails when the pipeline fails, the themed table was not created or
/// the destination file cannot be written.
pub async fn execute(
    ctx: &CliContext,
    args: PipelineArgs,
    table: ThemedTable,
    output: &Path,
    format: ExportFormat,
    limit: u64,
) -> Result<()> {
    pipeline::stage(ctx, &args).await?;

    let (data, _summary) = ctx.store.clean_load(table.name(), limit).await?;
    match format {
        ExportFormat::Csv => write_csv(&data, output)?,
        ExportFormat::Json => write_json(&data, output)?,
    }

    println!(
        "Exported {} row(s) from {} to {}.",
        data.row_count(),
        table.name(),
        output.display()
    );
    Ok(())
}

fn write_csv(data: &TableData, output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(data.headers())?;
    for row in data.rows() {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(data: &TableData, output: &Path) -> Result<()> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
        .rows()
        .iter()
        .map(|row| {
            data.headers()
                .iter()
                .zip(row)
                .map(|(header, cell)| {
                    let value = cell.as_ref().map_or(serde_json::Value::Null, |cell| {
                        serde_json::Value::String(cell.clone())
                    });
                    (header.clone(), value)
                })
                .collect()
        })
        .collect();

    let file = File::create(output)?;
    serde_json::to_writer_pretty(file, &rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sample() -> TableData {
        TableData::new(
            vec!["notification_number".to_string(), "sex".to_string()],
            vec![
                vec![Some("100".to_string()), Some("F".to_string())],
                vec![Some("2".to_string()), None],
            ],
        )
        .unwrap()
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exams.csv");

        write_csv(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "notification_number,sex\n100,F\n2,\n");
    }

    #[test]
    fn json_export_writes_null_for_missing_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exams.json");

        write_json(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["notification_number"], "100");
        assert_eq!(parsed[1]["sex"], serde_json::Value::Null);
    }
}
