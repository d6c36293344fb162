//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which drive the
//! catalog client, fetcher and store through `CliContext`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dqsus_cli::pipeline::PipelineArgs;
use dqsus_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

/// Default filter when `RUST_LOG` is unset: quiet unless asked.
const QUIET_FILTER: &str = "warn";

/// Filter behind `--verbose`: debug output from every dqsus crate.
const VERBOSE_FILTER: &str =
    "warn,dqsus_core=debug,dqsus_sinan=debug,dqsus_download=debug,dqsus_db=debug,dqsus_cli=debug";

fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::new(cli.data_dir);
    let ctx = bootstrap(config).await?;

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Years { disease } => {
            handlers::years::execute(&ctx, disease).await?;
        }
        Commands::Fetch {
            disease,
            years,
            force,
        } => {
            handlers::fetch::execute(&ctx, disease, years, force).await?;
        }
        Commands::Ingest {
            disease,
            years,
            refresh,
        } => {
            handlers::ingest::execute(&ctx, disease, years, refresh).await?;
        }
        Commands::Transform { language } => {
            handlers::transform::execute(&ctx, language).await?;
        }
        Commands::Show {
            table,
            limit,
            disease,
            years,
            language,
            refresh,
        } => {
            let args = PipelineArgs {
                disease,
                years,
                language,
                refresh,
            };
            handlers::show::execute(&ctx, args, table, limit).await?;
        }
        Commands::Export {
            table,
            output,
            format,
            limit,
            disease,
            years,
            language,
            refresh,
        } => {
            let args = PipelineArgs {
                disease,
                years,
                language,
                refresh,
            };
            handlers::export::execute(&ctx, args, table, &output, format, limit).await?;
        }
        Commands::Validate {
            table,
            limit,
            disease,
            years,
            language,
            refresh,
        } => {
            let args = PipelineArgs {
                disease,
                years,
                language,
                refresh,
            };
            handlers::validate::execute(&ctx, args, table, limit).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx)?;
        }
    }

    Ok(())
}
