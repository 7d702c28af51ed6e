//! Sigil - signing-config loader and build-variant resolver.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Validate the signing config
//! │   ├── variant       # Resolve a build variant
//! │   ├── completions   # Shell completions
//! │   └── output        # Shared terminal output helpers
//! └── core/             # Core library components
//!     ├── props         # key=value property-file parser
//!     ├── signing       # SigningCredentials loader + validation
//!     ├── variant       # BuildType / BuildVariant selection
//!     └── constants     # File names and required keys
//! ```
//!
//! # Features
//!
//! - Loads `key.properties`-style signing configs and validates them
//! - Fatal, named diagnostics for missing files, fields, and keystores
//! - Debug variants resolve without ever touching the signing config
//! - Passwords zeroized on drop and never printed or serialized

pub mod cli;
pub mod core;
pub mod error;
