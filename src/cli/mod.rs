//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod variant;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;
use crate::core::variant::BuildType;

/// Sigil - signing-config loader and build-variant resolver.
#[derive(Parser)]
#[command(
    name = "sigil",
    about = "Signing-config loader and build-variant resolver",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the signing properties file
    #[arg(
        long,
        global = true,
        env = "SIGIL_PROPERTIES",
        default_value = constants::PROPERTIES_FILE
    )]
    pub properties: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate the signing config and report its fields
    Check,

    /// Resolve a build variant (flags plus signing for release)
    Variant {
        /// Build type to resolve
        #[arg(value_enum)]
        build_type: BuildType,

        /// Output as JSON (passwords are never included)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, properties: &std::path::Path) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Check => check::execute(properties),
        Variant { build_type, json } => variant::execute(build_type, properties, json),
        Completions { shell } => completions::execute(shell),
    }
}
