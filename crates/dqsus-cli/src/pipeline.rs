//! Full pipeline orchestration shared by `show`, `export` and `validate`.
//!
//! One stage run is: resolve dataset files from the catalog, fetch them
//! into the raw cache, stage them into the database, rename the columns
//! and rebuild the themed tables.

use anyhow::Result;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::presentation::progress::fetch_progress;
use dqsus_core::{DatasetFile, Disease, MappingLanguage};
use dqsus_download::{DatasetFetcher, FetchConfig, FetchRequest, FetchedDataset};
use dqsus_sinan::SinanError;

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineArgs {
    /// Disease to process.
    pub disease: Disease,
    /// Years to include; empty means every available year.
    pub years: Vec<u16>,
    /// Column-name language for the rename step.
    pub language: MappingLanguage,
    /// Re-download files already in the cache.
    pub refresh: bool,
}

/// Resolve the dataset files a run covers from one catalog listing.
///
/// With explicit years, each must exist in the listing; otherwise every
/// listed dataset for the disease is used.
pub async fn resolve_files(ctx: &CliContext, args: &PipelineArgs) -> Result<Vec<DatasetFile>> {
    let listed = ctx.client.list_files(args.disease).await?;
    if args.years.is_empty() {
        return Ok(listed);
    }

    let mut files = Vec::with_capacity(args.years.len());
    for &year in &args.years {
        let file = listed
            .iter()
            .find(|file| file.year == year)
            .cloned()
            .ok_or(SinanError::DatasetNotFound {
                disease: args.disease,
                year,
            })?;
        files.push(file);
    }
    Ok(files)
}

/// Fetch the resolved files into the raw cache, with a progress bar.
pub async fn fetch_files(
    ctx: &CliContext,
    args: &PipelineArgs,
    files: Vec<DatasetFile>,
) -> Result<Vec<FetchedDataset>> {
    let requests: Vec<FetchRequest> = files
        .into_iter()
        .map(|file| {
            let url = ctx.client.file_url(&file);
            FetchRequest::new(file, url)
        })
        .collect();

    let config = FetchConfig::new(ctx.paths.raw_data_dir.clone()).with_force(args.refresh);
    let fetcher = DatasetFetcher::new(config).with_progress(fetch_progress());
    Ok(fetcher.fetch(&requests).await?)
}

/// Run the staging half of the pipeline: fetch, ingest, rename, transform.
pub async fn stage(ctx: &CliContext, args: &PipelineArgs) -> Result<()> {
    let files = resolve_files(ctx, args).await?;
    let fetched = fetch_files(ctx, args, files).await?;

    let paths: Vec<_> = fetched.into_iter().map(|dataset| dataset.path).collect();
    ctx.store.ingest_csv(&paths).await?;

    let unmapped = ctx.store.rename_columns(args.language).await?;
    warn_unmapped(&unmapped);

    ctx.store.transform().await?;
    Ok(())
}

/// Warn about mapping entries that matched no staging column.
pub fn warn_unmapped(unmapped: &[String]) {
    if unmapped.is_empty() {
        return;
    }
    warn!(
        count = unmapped.len(),
        "mapping entries matched no staging column and were not renamed"
    );
    for source in unmapped {
        warn!(column = %source, "not renamed");
    }
}
