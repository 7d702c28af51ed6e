//! Signing-config validation command.

use std::path::Path;

use crate::cli::output;
use crate::core::signing::SigningCredentials;
use crate::error::Result;

/// Fixed mask for password fields; never reveals length.
const MASK: &str = "********";

/// Load and validate the signing config, reporting each field.
///
/// Passwords are masked. Any loader error propagates and halts with a
/// non-zero exit.
pub fn execute(properties: &Path) -> Result<()> {
    let creds = SigningCredentials::load(properties)?;

    output::section("Signing Config");
    output::kv("properties", output::path(&properties.display().to_string()));
    output::kv(
        "store file",
        output::path(&creds.store_file.display().to_string()),
    );
    output::kv("store password", MASK);
    output::kv("key alias", &creds.key_alias);
    output::kv("key password", MASK);

    println!();
    output::success("signing config is complete");

    Ok(())
}
