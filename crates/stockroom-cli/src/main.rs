//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to AppCore.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use stockroom_cli::handlers::{add::AddArgs, edit::EditArgs};
use stockroom_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        data_dir: cli.data_dir,
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Paths => {
            handlers::paths::execute(ctx.config())?;
        }
        Commands::Add {
            name,
            quantity,
            price,
            image,
        } => {
            handlers::add::execute(
                &ctx,
                AddArgs {
                    name,
                    quantity,
                    price,
                    image,
                },
            )
            .await?;
        }
        Commands::Edit {
            id,
            name,
            quantity,
            price,
            image,
        } => {
            handlers::edit::execute(
                &ctx,
                EditArgs {
                    id,
                    name,
                    quantity,
                    price,
                    image,
                },
            )
            .await?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&ctx, &id, force).await?;
        }
        Commands::List { search, json } => {
            handlers::list::execute(&ctx, search.as_deref(), json).await?;
        }
        Commands::Export { output } => {
            handlers::export::execute(&ctx, &output).await?;
        }
        Commands::Watch { search } => {
            handlers::watch::execute(&ctx, search).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = u8::try_from(exit_code_for(err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
