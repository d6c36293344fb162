//! Ingest command handler.
//!
//! Fetches dataset files (cache-aware) and stages them into the `sinan`
//! table, leaving column names and themed tables untouched.

use anyhow::Result;

use dqsus_core::{Disease, MappingLanguage, STAGING_TABLE};

use crate::bootstrap::CliContext;
use crate::pipeline::{self, PipelineArgs};

/// Execute the ingest command.
///
/// # Errors
///
/// Fails when a requested year is not published, a download fails or a
/// dataset file cannot be staged.
pub async fn execute(
    ctx: &CliContext,
    disease: Disease,
    years: Vec<u16>,
    refresh: bool,
) -> Result<()> {
    let args = PipelineArgs {
        disease,
        years,
        language: MappingLanguage::default(),
        refresh,
    };

    let files = pipeline::resolve_files(ctx, &args).await?;
    let fetched = pipeline::fetch_files(ctx, &args, files).await?;
    let paths: Vec<_> = fetched.into_iter().map(|dataset| dataset.path).collect();

    let ingested = ctx.store.ingest_csv(&paths).await?;
    for file in &ingested {
        println!("  staged {:>8} row(s) from {}", file.rows, file.path.display());
    }

    let total = ctx.store.row_count(STAGING_TABLE).await?;
    println!("{STAGING_TABLE} now holds {total} row(s).");
    Ok(())
}
