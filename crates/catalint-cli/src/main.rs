//! Catalint CLI - validate bibliographic catalog sheets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            file,
            sheet,
            licenses,
            language_patterns,
            header,
            threads,
            json,
        } => commands::check::run(commands::check::CheckArgs {
            file,
            sheet,
            licenses,
            language_patterns,
            header,
            threads,
            json,
            verbose: cli.verbose,
        }),

        Commands::Schema { sheet, json } => commands::schema::run(sheet, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "catalint=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
