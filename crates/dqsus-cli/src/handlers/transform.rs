//! Transform command handler.
//!
//! Renames staged columns through the bundled mapping and rebuilds the
//! themed tables from whatever is currently staged.

use anyhow::Result;

use dqsus_core::{MappingLanguage, ThemedTable};

use crate::bootstrap::CliContext;
use crate::pipeline::warn_unmapped;

/// Execute the transform command.
///
/// # Errors
///
/// Fails when nothing has been staged yet or a rebuild statement fails.
pub async fn execute(ctx: &CliContext, language: MappingLanguage) -> Result<()> {
    let unmapped = ctx.store.rename_columns(language).await?;
    warn_unmapped(&unmapped);

    ctx.store.transform().await?;

    println!("Themed tables:");
    for table in ThemedTable::ALL {
        if ctx.store.table_exists(table.name()).await? {
            let rows = ctx.store.row_count(table.name()).await?;
            println!("  {:<20} {rows:>8} row(s)", table.name());
        } else {
            println!("  {:<20} not created (no source columns staged)", table.name());
        }
    }
    Ok(())
}
