//! ci-bootstrap CLI - CI toolchain bootstrapper
//!
//! Entry point for the ci-bootstrap command-line application.

use anyhow::Result;
use clap::Parser;

use ci_bootstrap::cli::output::display_error;
use ci_bootstrap::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // Run the bootstrap and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
