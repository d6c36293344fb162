//! Fetch command handler.
//!
//! Downloads dataset files into the raw cache without staging them.

use anyhow::Result;
use indicatif::HumanBytes;

use dqsus_core::{Disease, MappingLanguage};

use crate::bootstrap::CliContext;
use crate::pipeline::{self, PipelineArgs};

/// Execute the fetch command.
///
/// Resolves the requested dataset files from the live catalog and
/// downloads each missing one; files already in the cache are reported
/// as cached unless `force` is set.
///
/// # Errors
///
/// Fails when a requested year is not published or a download fails.
pub async fn execute(
    ctx: &CliContext,
    disease: Disease,
    years: Vec<u16>,
    force: bool,
) -> Result<()> {
    let args = PipelineArgs {
        disease,
        years,
        language: MappingLanguage::default(),
        refresh: force,
    };

    let files = pipeline::resolve_files(ctx, &args).await?;
    if files.is_empty() {
        println!("No datasets published for {disease}.");
        return Ok(());
    }

    let fetched = pipeline::fetch_files(ctx, &args, files).await?;
    for dataset in &fetched {
        let status = if dataset.cached { "cached" } else { "fetched" };
        println!(
            "  {status:<8} {} ({})",
            dataset.path.display(),
            HumanBytes(dataset.bytes)
        );
    }
    println!("{} file(s) in the raw cache.", fetched.len());
    Ok(())
}
