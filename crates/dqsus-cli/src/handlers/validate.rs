//! Validate command handler.
//!
//! Runs the full pipeline and checks one themed table against its
//! built-in schema. The table is loaded without cleanup so null values
//! in required columns are still visible to the checks.

use anyhow::{Result, bail};

use dqsus_core::{ThemedTable, builtin_schema, validate_table};

use crate::bootstrap::CliContext;
use crate::pipeline::{self, PipelineArgs};

/// Execute the validate command.
///
/// # Errors
///
/// Fails when the pipeline fails, the themed table was not created or
/// the table has error-severity validation issues.
pub async fn execute(
    ctx: &CliContext,
    args: PipelineArgs,
    table: ThemedTable,
    limit: u64,
) -> Result<()> {
    pipeline::stage(ctx, &args).await?;

    let data = ctx.store.load(table.name(), limit).await?;
    let schema = builtin_schema(table);
    let report = validate_table(&schema, &data);

    println!("{report}");
    for issue in &report.issues {
        println!("  {issue}");
    }

    if !report.passed() {
        bail!("validation failed with {} error(s)", report.error_count());
    }
    println!("{} passed validation.", table.name());
    Ok(())
}
