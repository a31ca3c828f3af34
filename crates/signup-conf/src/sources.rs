//! Configuration sources for layered form settings
//!
//! Sources are merged in priority order
//! (environment variables > TOML file > built-in defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::FormSettings;

/// Default prefix for environment overrides
pub const ENV_PREFIX: &str = "SIGNUP_";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error reading {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },
}

/// Built-in defaults, always the lowest priority
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSource;

impl DefaultSource {
	pub fn new() -> Self {
		Self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let value = serde_json::to_value(FormSettings::default())?;
		Ok(into_index_map(value))
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Built-in defaults".to_string()
	}
}

/// TOML file configuration source
///
/// A missing file is treated as empty unless the source is marked required.
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a new TOML file source
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::sources::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("does-not-exist.toml");
	/// assert!(source.load().unwrap().is_empty());
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fail loading when the file does not exist
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.required && !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "settings file not found, skipping");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
			path: self.path.clone(),
			source,
		})?;
		let table: toml::Table = toml::from_str(&content)?;
		let value = serde_json::to_value(table)?;
		Ok(into_index_map(value))
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variable configuration source
///
/// `SIGNUP_MIN_PASSWORD_LENGTH` maps to `min_password_length` and
/// `SIGNUP_MESSAGES_<KIND>` maps to `messages.<kind>`.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Create a source reading the process environment with the default prefix
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Set a prefix filter for environment variables
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Read from a fixed set of variables instead of the process environment
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::from_vars([("SIGNUP_MIN_PASSWORD_LENGTH", "8")]);
	/// let config = source.load().unwrap();
	/// assert_eq!(config["min_password_length"], serde_json::json!(8));
	/// ```
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Variables carrying the prefix
	///
	/// Keys that are not valid Unicode cannot carry the prefix and are
	/// skipped; a prefixed key with a non-Unicode value is an error.
	fn prefixed_vars(&self) -> Result<Vec<(String, String)>, SourceError> {
		if let Some(vars) = &self.vars {
			return Ok(vars
				.iter()
				.filter(|(key, _)| key.starts_with(&self.prefix))
				.cloned()
				.collect());
		}

		let mut vars = Vec::new();
		for (key, value) in std::env::vars_os() {
			let Ok(key) = key.into_string() else {
				continue;
			};
			if !key.starts_with(&self.prefix) {
				continue;
			}
			let value = value
				.into_string()
				.map_err(|raw| SourceError::InvalidValue {
					key: key.clone(),
					message: format!("value is not valid Unicode: {:?}", raw),
				})?;
			vars.push((key, value));
		}
		Ok(vars)
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();
		let mut messages = serde_json::Map::new();

		for (key, value) in self.prefixed_vars()? {
			let Some(name) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let name = name.to_lowercase();

			if name == "min_password_length" {
				let parsed: u64 = value.trim().parse().map_err(|_| SourceError::InvalidValue {
					key: key.clone(),
					message: format!("expected a non-negative integer, got '{}'", value),
				})?;
				config.insert(name, Value::from(parsed));
			} else if let Some(kind) = name.strip_prefix("messages_")
				&& matches!(kind, "invalid_email" | "weak_password" | "password_mismatch")
			{
				messages.insert(kind.to_string(), Value::String(value));
			} else {
				tracing::warn!(key = %key, "ignoring unknown signup setting");
			}
		}

		if !messages.is_empty() {
			config.insert("messages".to_string(), Value::Object(messages));
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

fn into_index_map(value: Value) -> IndexMap<String, Value> {
	match value {
		Value::Object(map) => map.into_iter().collect(),
		_ => IndexMap::new(),
	}
}

/// Merge `overlay` into `base`, recursing into nested tables
pub(crate) fn deep_merge(base: &mut IndexMap<String, Value>, overlay: IndexMap<String, Value>) {
	for (key, value) in overlay {
		match (base.get_mut(&key), value) {
			(Some(Value::Object(existing)), Value::Object(incoming)) => {
				for (k, v) in incoming {
					existing.insert(k, v);
				}
			}
			(_, value) => {
				base.insert(key, value);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	fn test_default_source_contains_all_keys() {
		let config = DefaultSource::new().load().unwrap();

		assert_eq!(config["min_password_length"], json!(5));
		assert_eq!(
			config["messages"]["invalid_email"],
			json!("The email you input is invalid.")
		);
	}

	#[rstest]
	fn test_toml_source_reads_nested_messages() {
		// Arrange
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("signup.toml");
		let mut file = fs::File::create(&path).unwrap();
		writeln!(
			file,
			"min_password_length = 8\n\n[messages]\nweak_password = \"Too short\""
		)
		.unwrap();

		// Act
		let config = TomlFileSource::new(&path).load().unwrap();

		// Assert
		assert_eq!(config["min_password_length"], json!(8));
		assert_eq!(config["messages"]["weak_password"], json!("Too short"));
	}

	#[rstest]
	fn test_required_toml_source_missing_file() {
		let source = TomlFileSource::new("/nonexistent/signup.toml").required();

		let result = source.load();

		assert!(matches!(result, Err(SourceError::Io { .. })));
	}

	#[rstest]
	fn test_toml_source_rejects_malformed_file() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("signup.toml");
		fs::write(&path, "min_password_length = = 3").unwrap();

		let result = TomlFileSource::new(&path).load();

		assert!(matches!(result, Err(SourceError::Toml(_))));
	}

	#[rstest]
	fn test_env_source_maps_keys() {
		let source = EnvSource::from_vars([
			("SIGNUP_MIN_PASSWORD_LENGTH", "7"),
			("SIGNUP_MESSAGES_PASSWORD_MISMATCH", "Nope"),
			("UNRELATED", "x"),
		]);

		let config = source.load().unwrap();

		assert_eq!(config.len(), 2);
		assert_eq!(config["min_password_length"], json!(7));
		assert_eq!(config["messages"]["password_mismatch"], json!("Nope"));
	}

	#[rstest]
	#[case("abc")]
	#[case("-1")]
	#[case("")]
	fn test_env_source_rejects_bad_length(#[case] raw: &str) {
		let source = EnvSource::from_vars([("SIGNUP_MIN_PASSWORD_LENGTH", raw)]);

		let result = source.load();

		assert!(matches!(result, Err(SourceError::InvalidValue { .. })));
	}

	#[rstest]
	fn test_env_source_ignores_unknown_keys() {
		let source = EnvSource::from_vars([("SIGNUP_THEME", "dark")]);

		assert!(source.load().unwrap().is_empty());
	}

	#[rstest]
	fn test_deep_merge_keeps_sibling_messages() {
		let mut base = DefaultSource::new().load().unwrap();
		let mut overlay = IndexMap::new();
		overlay.insert("messages".to_string(), json!({ "weak_password": "short" }));

		deep_merge(&mut base, overlay);

		assert_eq!(base["messages"]["weak_password"], json!("short"));
		assert_eq!(
			base["messages"]["password_mismatch"],
			json!("The passwords don't match. Try again.")
		);
	}
}
