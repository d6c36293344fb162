//! Show command handler.
//!
//! Runs the full pipeline and prints a cleaned preview of one themed
//! table.

use anyhow::Result;

use dqsus_core::ThemedTable;

use crate::bootstrap::CliContext;
use crate::pipeline::{self, PipelineArgs};
use crate::presentation::render_table;

/// Execute the show command.
///
/// # Errors
///
/// Fails when the pipeline fails or the themed table was not created
/// (none of its source columns were staged).
pub async fn execute(
    ctx: &CliContext,
    args: PipelineArgs,
    table: ThemedTable,
    limit: u64,
) -> Result<()> {
    pipeline::stage(ctx, &args).await?;

    let (data, summary) = ctx.store.clean_load(table.name(), limit).await?;
    if !summary.dropped_columns.is_empty() {
        println!(
            "Dropped {} all-null column(s): {}",
            summary.dropped_columns.len(),
            summary.dropped_columns.join(", ")
        );
    }
    if summary.dropped_rows > 0 {
        println!("Dropped {} row(s) with missing values.", summary.dropped_rows);
    }

    if data.is_empty() {
        println!("{} has no rows after cleanup.", table.name());
        return Ok(());
    }

    print!("{}", render_table(&data));
    println!("{} row(s) shown from {}.", data.row_count(), table.name());
    Ok(())
}
