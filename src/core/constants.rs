//! Constants used throughout sigil.
//!
//! Centralizes magic strings and configuration values.

/// Default signing properties file name (key.properties).
pub const PROPERTIES_FILE: &str = "key.properties";

/// Property key for the keystore file path.
pub const KEY_STORE_FILE: &str = "storeFile";

/// Property key for the keystore password.
pub const KEY_STORE_PASSWORD: &str = "storePassword";

/// Property key for the signing key alias.
pub const KEY_KEY_ALIAS: &str = "keyAlias";

/// Property key for the signing key password.
pub const KEY_KEY_PASSWORD: &str = "keyPassword";

/// All keys a complete signing config must provide.
pub const REQUIRED_KEYS: &[&str] = &[
    KEY_STORE_FILE,
    KEY_STORE_PASSWORD,
    KEY_KEY_ALIAS,
    KEY_KEY_PASSWORD,
];
