//! Output formatting utilities

use colored::Colorize;

/// Print a success message
pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".green().bold(), msg);
}

/// Print an informational message
pub fn info(msg: &str) {
	eprintln!("{} {}", "•".cyan().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Formats one row of a two-column listing.
pub fn row(key: &str, value: &str, width: usize) -> String {
	format!("  {:<width$}  {}", key.bold(), value, width = width)
}
