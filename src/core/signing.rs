//! Signing credential loading and validation.
//!
//! A release artifact can only be signed when all four credential fields
//! resolve from the property file and the keystore exists on disk. Anything
//! short of that is a fatal configuration error, never a default.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::props::Properties;
use crate::error::{Result, SigilError};

/// The material needed to sign a release artifact.
///
/// Constructed once per invocation and immutable thereafter. Passwords are
/// wrapped in `Zeroizing` so they are wiped from memory on drop.
pub struct SigningCredentials {
    /// Resolved path to the keystore file. Guaranteed to exist at load time.
    pub store_file: PathBuf,
    /// Keystore password.
    pub store_password: Zeroizing<String>,
    /// Identifier of the signing key within the store.
    pub key_alias: String,
    /// Password for the signing key.
    pub key_password: Zeroizing<String>,
}

impl SigningCredentials {
    /// Load signing credentials from a property file.
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` if the property file does not exist.
    /// - `FieldMissing` if any of `storeFile`, `storePassword`, `keyAlias`,
    ///   `keyPassword` is absent or empty.
    /// - `PathInvalid` if the referenced keystore does not exist on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let props = Properties::load(path)?;
        Self::from_properties(&props)
    }

    /// Build credentials from already-parsed properties.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        debug!(path = %props.path().display(), "resolving signing credentials");

        let store_file = props.require(constants::KEY_STORE_FILE)?;
        let store_password = props.require(constants::KEY_STORE_PASSWORD)?;
        let key_alias = props.require(constants::KEY_KEY_ALIAS)?;
        let key_password = props.require(constants::KEY_KEY_PASSWORD)?;

        // Relative keystore paths resolve against the property file's
        // directory, matching where its consumers anchor them.
        let store_file = resolve_store_file(props.base_dir(), store_file);
        if !store_file.exists() {
            return Err(SigilError::PathInvalid(store_file));
        }

        debug!(
            store_file = %store_file.display(),
            key_alias,
            "signing credentials resolved"
        );

        Ok(Self {
            store_file,
            store_password: Zeroizing::new(store_password.to_string()),
            key_alias: key_alias.to_string(),
            key_password: Zeroizing::new(key_password.to_string()),
        })
    }
}

fn resolve_store_file(base_dir: &Path, store_file: &str) -> PathBuf {
    let path = Path::new(store_file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

impl PartialEq for SigningCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.store_file == other.store_file
            && *self.store_password == *other.store_password
            && self.key_alias == other.key_alias
            && *self.key_password == *other.key_password
    }
}

impl Eq for SigningCredentials {}

impl fmt::Debug for SigningCredentials {
    // Passwords never reach logs or panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .finish()
    }
}
