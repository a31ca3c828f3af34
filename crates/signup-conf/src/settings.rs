//! Form settings
//!
//! Settings are immutable once built. A form keeps its own copy, so a
//! validation result depends only on the form state and these values.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the minimum password length in
/// [`ErrorMessages::weak_password`].
pub const MIN_LENGTH_PLACEHOLDER: &str = "{min}";

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

/// Validation error
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	#[error("Multiple validation errors: {0:?}")]
	Multiple(Vec<ValidationError>),
}

/// Display text for each validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
	pub invalid_email: String,
	/// May contain `{min}`, see [`ErrorMessages::weak_password_for`]
	pub weak_password: String,
	pub password_mismatch: String,
}

impl ErrorMessages {
	/// Render the weak password message for a given minimum length
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::ErrorMessages;
	///
	/// let messages = ErrorMessages::default();
	/// assert_eq!(
	///     messages.weak_password_for(5),
	///     "The password you entered should contain 5 or more characters."
	/// );
	/// ```
	pub fn weak_password_for(&self, min_length: usize) -> String {
		self.weak_password
			.replace(MIN_LENGTH_PLACEHOLDER, &min_length.to_string())
	}
}

impl Default for ErrorMessages {
	fn default() -> Self {
		Self {
			invalid_email: "The email you input is invalid.".to_string(),
			weak_password: "The password you entered should contain {min} or more characters."
				.to_string(),
			password_mismatch: "The passwords don't match. Try again.".to_string(),
		}
	}
}

/// Settings for the signup form validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Minimum password length in characters
	pub min_password_length: usize,
	pub messages: ErrorMessages,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
			messages: ErrorMessages::default(),
		}
	}
}

impl FormSettings {
	/// Override the minimum password length
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::FormSettings;
	///
	/// let settings = FormSettings::default().with_min_password_length(8);
	/// assert_eq!(settings.min_password_length, 8);
	/// ```
	pub fn with_min_password_length(mut self, min: usize) -> Self {
		self.min_password_length = min;
		self
	}

	pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
		self.messages = messages;
		self
	}

	/// Check that the settings can drive a form
	///
	/// A zero minimum length would disable the password check and an empty
	/// message would render a blank error.
	pub fn validate(&self) -> Result<(), ValidationError> {
		let mut errors = Vec::new();

		if self.min_password_length == 0 {
			errors.push(ValidationError::InvalidValue {
				key: "min_password_length".to_string(),
				message: "must be at least 1".to_string(),
			});
		}

		let messages = [
			("messages.invalid_email", &self.messages.invalid_email),
			("messages.weak_password", &self.messages.weak_password),
			("messages.password_mismatch", &self.messages.password_mismatch),
		];
		for (key, message) in messages {
			if message.trim().is_empty() {
				errors.push(ValidationError::InvalidValue {
					key: key.to_string(),
					message: "must not be empty".to_string(),
				});
			}
		}

		match errors.len() {
			0 => Ok(()),
			1 => Err(errors.remove(0)),
			_ => Err(ValidationError::Multiple(errors)),
		}
	}
}
