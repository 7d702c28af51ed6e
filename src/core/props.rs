//! Property-file parsing.
//!
//! Reads plain `key=value` text files of the kind consumed by release
//! signing pipelines (Java properties conventions: `#` and `!` comments).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SigilError};

/// A parsed key=value property file.
#[derive(Debug, Clone)]
pub struct Properties {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Load and parse a property file.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped.
    /// Keys and values are trimmed; surrounding single or double quotes
    /// on values are stripped. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns `SigilError::ConfigMissing` if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading properties");

        if !path.exists() {
            return Err(SigilError::ConfigMissing(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;

        let mut entries = BTreeMap::new();
        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                entries.insert(key.to_string(), value.to_string());
            }
        }

        debug!(entries = entries.len(), "properties loaded");

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Path the properties were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the property file.
    ///
    /// Relative paths inside the file resolve against this directory.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Look up a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key that the config is required to provide.
    ///
    /// An empty value is treated as absent: the field is not resolvable.
    ///
    /// # Errors
    ///
    /// Returns `SigilError::FieldMissing` naming the key.
    pub fn require(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(SigilError::FieldMissing(key.to_string())),
        }
    }

    /// Number of entries parsed from the file.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file contained no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
