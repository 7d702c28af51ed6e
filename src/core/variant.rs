//! Build-variant selection.
//!
//! Maps a requested build type to its flag set and, for release, attaches
//! signing credentials. Debug builds never touch the signing config.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::signing::SigningCredentials;
use crate::error::Result;

/// A named build profile.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    /// Lowercase name as used on the command line and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

/// One resolved build profile: flags plus optional signing credentials.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildVariant {
    pub build_type: BuildType,
    pub minify: bool,
    pub shrink_resources: bool,
    /// Present only for release builds.
    pub signing: Option<SigningCredentials>,
}

/// Resolve the requested build variant.
///
/// Both variants carry `minify = false` and `shrink_resources = false`.
/// Selecting `release` loads and validates credentials from `properties`;
/// selecting `debug` performs no I/O at all.
///
/// # Errors
///
/// For `release`, any loader failure propagates and is fatal.
pub fn select(build_type: BuildType, properties: &Path) -> Result<BuildVariant> {
    debug!(variant = build_type.name(), "selecting build variant");

    let signing = match build_type {
        BuildType::Debug => None,
        BuildType::Release => Some(SigningCredentials::load(properties)?),
    };

    Ok(BuildVariant {
        build_type,
        minify: false,
        shrink_resources: false,
        signing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SigilError;
    use tempfile::TempDir;

    fn valid_props(dir: &TempDir) -> std::path::PathBuf {
        std::fs::write(dir.path().join("release.jks"), b"keystore bytes").unwrap();
        let path = dir.path().join("key.properties");
        std::fs::write(
            &path,
            "storeFile=release.jks\n\
             storePassword=store-secret\n\
             keyAlias=upload\n\
             keyPassword=key-secret\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_debug_never_reads_properties() {
        let tmp = TempDir::new().unwrap();
        // No properties file exists; debug must still succeed.
        let missing = tmp.path().join("key.properties");

        let variant = select(BuildType::Debug, &missing).unwrap();
        assert_eq!(variant.build_type, BuildType::Debug);
        assert!(!variant.minify);
        assert!(!variant.shrink_resources);
        assert!(variant.signing.is_none());
    }

    #[test]
    fn test_release_attaches_credentials() {
        let tmp = TempDir::new().unwrap();
        let path = valid_props(&tmp);

        let variant = select(BuildType::Release, &path).unwrap();
        assert_eq!(variant.build_type, BuildType::Release);
        assert!(!variant.minify);
        assert!(!variant.shrink_resources);

        let signing = variant.signing.expect("release carries signing");
        assert_eq!(signing.key_alias, "upload");
        assert_eq!(signing.store_file, tmp.path().join("release.jks"));
    }

    #[test]
    fn test_release_fails_without_config() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("key.properties");

        let err = select(BuildType::Release, &missing).unwrap_err();
        assert!(matches!(err, SigilError::ConfigMissing(_)));
    }
}
