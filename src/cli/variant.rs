//! Build-variant resolution command.

use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::core::variant::{self, BuildType};
use crate::error::Result;

/// Resolve a build variant and print its flags and signing summary.
///
/// Passwords are never serialized; the `--json` payload carries only the
/// keystore path and key alias.
pub fn execute(build_type: BuildType, properties: &Path, json: bool) -> Result<()> {
    let variant = variant::select(build_type, properties)?;

    if json {
        let payload = json!({
            "variant": variant.build_type,
            "minify": variant.minify,
            "shrinkResources": variant.shrink_resources,
            "signing": variant.signing.as_ref().map(|s| {
                json!({
                    "storeFile": s.store_file,
                    "keyAlias": s.key_alias,
                })
            }),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    output::section("Build Variant");
    output::kv("variant", variant.build_type.name());
    output::kv("minify", variant.minify);
    output::kv("shrink resources", variant.shrink_resources);

    match &variant.signing {
        Some(signing) => {
            output::kv(
                "store file",
                output::path(&signing.store_file.display().to_string()),
            );
            output::kv("key alias", &signing.key_alias);
        }
        None => {
            output::kv("signing", "none");
        }
    }

    println!();
    match variant.build_type {
        BuildType::Release => output::success("release variant is ready to sign"),
        BuildType::Debug => output::dimmed("debug builds are never signed or minified"),
    }

    Ok(())
}
