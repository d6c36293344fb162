//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Call the catalog client, fetcher and store through the context
//!   2. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the database pool directly
//! - Contain staging or transform logic

pub mod export;
pub mod fetch;
pub mod ingest;
pub mod paths;
pub mod show;
pub mod transform;
pub mod validate;
pub mod years;
