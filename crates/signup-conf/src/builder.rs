//! Settings builder merging configuration sources by priority

use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

use crate::settings::{FormSettings, ValidationError};
use crate::sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource, deep_merge};

/// Error raised while building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {description}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Failed to deserialize settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// Builder for [`FormSettings`]
///
/// # Examples
///
/// ```
/// use signup_conf::{EnvSource, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .add_source(EnvSource::from_vars([("SIGNUP_MIN_PASSWORD_LENGTH", "8")]))
///     .build()
///     .unwrap();
/// assert_eq!(settings.min_password_length, 8);
/// ```
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create a builder holding only the built-in defaults
	pub fn new() -> Self {
		Self {
			sources: vec![Box::new(DefaultSource::new())],
		}
	}

	/// Defaults, an optional TOML file, then `SIGNUP_*` environment variables
	pub fn layered(path: impl Into<PathBuf>) -> Self {
		Self::new()
			.add_source(TomlFileSource::new(path))
			.add_source(EnvSource::new())
	}

	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}

	/// Merge every source and validate the result
	pub fn build(mut self) -> Result<FormSettings, SettingsError> {
		// Stable sort keeps insertion order among equal priorities
		self.sources.sort_by_key(|s| s.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let config = source.load().map_err(|source_err| SettingsError::Source {
				description: source.description(),
				source: source_err,
			})?;
			tracing::debug!(source = %source.description(), keys = config.len(), "merged settings source");
			deep_merge(&mut merged, config);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: FormSettings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;

		tracing::info!(
			min_password_length = settings.min_password_length,
			"signup form settings loaded"
		);
		Ok(settings)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}
