//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints the resolved paths in `key = value` format. Useful for
/// verifying where the cache and database actually live when
/// `DQSUS_DATA_DIR` or `--data-dir` is in play.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.paths);
    Ok(())
}
