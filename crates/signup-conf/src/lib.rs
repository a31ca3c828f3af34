//! Configuration for the signup form validator
//!
//! Settings are assembled from layered sources, lowest priority first:
//!
//! 1. Built-in defaults ([`DefaultSource`])
//! 2. A TOML file ([`TomlFileSource`])
//! 3. `SIGNUP_*` environment variables ([`EnvSource`])
//!
//! ```toml
//! min_password_length = 8
//!
//! [messages]
//! invalid_email = "Please enter a valid email address."
//! weak_password = "Use at least {min} characters."
//! password_mismatch = "The passwords don't match. Try again."
//! ```

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::{
	DEFAULT_MIN_PASSWORD_LENGTH, ErrorMessages, FormSettings, MIN_LENGTH_PLACEHOLDER,
	ValidationError,
};
pub use sources::{ConfigSource, DefaultSource, ENV_PREFIX, EnvSource, SourceError, TomlFileSource};
