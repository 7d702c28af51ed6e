//! Sigil - signing-config loader and build-variant resolver.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sigil::cli::output;
use sigil::cli::{execute, Cli};
use sigil::error::SigilError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SIGIL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sigil=debug")
        } else {
            EnvFilter::new("sigil=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, &cli.properties) {
        // Format error with suggestion if available
        let suggestion = match &e {
            SigilError::ConfigMissing(_) => Some(format!(
                "create {} or pass {}",
                cli.properties.display(),
                output::cmd("--properties <path>")
            )),
            SigilError::FieldMissing(field) => Some(format!(
                "add {}=... to {}",
                field,
                cli.properties.display()
            )),
            SigilError::PathInvalid(_) => Some(format!(
                "fix the storeFile entry in {}",
                cli.properties.display()
            )),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
