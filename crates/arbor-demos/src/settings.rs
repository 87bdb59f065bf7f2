//! Demo settings.
//!
//! Settings come from an optional TOML file. Every field has a default, so a
//! file only needs the values it overrides:
//!
//! ```toml
//! company = "Acme Corp"
//! log_level = "debug"
//!
//! [profile]
//! name = "Bob"
//! age = 31
//! ```

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File read when no path is given, if it exists.
pub const DEFAULT_SETTINGS_FILE: &str = "arbor.toml";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
	/// The file could not be read.
	#[error("File error: {0}")]
	FileError(String),

	/// The file is not valid TOML for [`DemoSettings`].
	#[error("Parse error: {0}")]
	ParseError(String),

	/// A value is out of range.
	#[error("Validation error: {0}")]
	ValidationError(String),
}

/// The user shown by the props and context demos.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
	pub name: String,
	pub age: u32,
	pub bio: String,
}

impl Default for ProfileSettings {
	fn default() -> Self {
		Self {
			name: "Alice".to_string(),
			age: 25,
			bio: "Loves hiking and photography".to_string(),
		}
	}
}

/// Settings for the demo CLI.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
	/// Company name shown by the company site.
	pub company: String,
	/// Year in the company site footer. Defaults to the current year.
	pub copyright_year: i32,
	pub profile: ProfileSettings,
	/// Default log filter, overridden by `RUST_LOG`.
	pub log_level: String,
	/// Pass limit of the render loop.
	pub max_passes: usize,
}

impl Default for DemoSettings {
	fn default() -> Self {
		Self {
			company: "My Company".to_string(),
			copyright_year: chrono::Local::now().year(),
			profile: ProfileSettings::default(),
			log_level: "warn".to_string(),
			max_passes: arbor_core::DEFAULT_MAX_PASSES,
		}
	}
}

impl DemoSettings {
	/// Loads settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] if it
	/// exists, or falls back to the defaults.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		match path {
			Some(path) => Self::from_file(path),
			None => {
				let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
				if default.is_file() {
					Self::from_file(default)
				} else {
					Ok(Self::default())
				}
			}
		}
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;
		let settings: DemoSettings = toml::from_str(&contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
		settings.validate()?;
		tracing::debug!(path = %path.display(), "settings loaded");
		Ok(settings)
	}

	/// Checks value ranges.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.max_passes == 0 {
			return Err(SettingsError::ValidationError(
				"max_passes must be at least 1".to_string(),
			));
		}
		if self.company.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"company must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn write_settings(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[rstest]
	fn test_defaults() {
		let settings = DemoSettings::default();
		assert_eq!(settings.company, "My Company");
		assert_eq!(settings.copyright_year, chrono::Local::now().year());
		assert_eq!(settings.profile.name, "Alice");
		assert_eq!(settings.max_passes, arbor_core::DEFAULT_MAX_PASSES);
	}

	#[rstest]
	fn test_partial_file_keeps_defaults() {
		let file = write_settings("company = \"Acme\"\n\n[profile]\nage = 31\n");
		let settings = DemoSettings::from_file(file.path()).unwrap();
		assert_eq!(settings.company, "Acme");
		assert_eq!(settings.profile.age, 31);
		assert_eq!(settings.profile.name, "Alice");
		assert_eq!(settings.log_level, "warn");
	}

	#[rstest]
	#[case("company = 3")]
	#[case("not toml at all [")]
	fn test_malformed_file(#[case] contents: &str) {
		let file = write_settings(contents);
		assert!(matches!(
			DemoSettings::from_file(file.path()),
			Err(SettingsError::ParseError(_))
		));
	}

	#[rstest]
	fn test_zero_pass_limit_is_rejected() {
		let file = write_settings("max_passes = 0");
		assert!(matches!(
			DemoSettings::from_file(file.path()),
			Err(SettingsError::ValidationError(_))
		));
	}

	#[rstest]
	fn test_missing_explicit_file() {
		let result = DemoSettings::load(Some(Path::new("/nonexistent/arbor.toml")));
		assert!(matches!(result, Err(SettingsError::FileError(_))));
	}
}
