use atm_session::application::session::Session;
use atm_session::config::AtmConfig;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// Interactive ATM simulator for a single in-memory account.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Diagnostics go to stderr; stdout carries only the ATM screens.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(AtmConfig::default(), stdin.lock(), stdout.lock());
    session.run().into_diagnostic()?;

    Ok(())
}
