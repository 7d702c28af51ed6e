//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console disables styling when NO_COLOR is set or the
//! stream is not a terminal):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: paths, commands, keys, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ signing config is complete`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ signing config not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --properties <path>`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  key alias  upload`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a path string in cyan.
///
/// Returns a styled string that can be used inline.
pub fn path(p: &str) -> String {
    style(p).cyan().to_string()
}

/// Format a command string in green.
///
/// Returns a styled string that can be used inline.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Signing Config
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
