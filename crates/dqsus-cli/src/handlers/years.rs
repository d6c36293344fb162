//! Years command handler.
//!
//! Asks the catalog which years a disease has published datasets for.

use anyhow::Result;

use dqsus_core::Disease;

use crate::bootstrap::CliContext;

/// Execute the years command.
pub async fn execute(ctx: &CliContext, disease: Disease) -> Result<()> {
    let sentence = ctx.client.describe_available_years(disease).await?;
    println!("{sentence}");
    Ok(())
}
