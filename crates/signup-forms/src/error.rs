//! Validation outcomes and form faults
//!
//! An [`ErrorKind`] is an expected outcome of a submit and is carried as
//! data inside a [`ValidationResult`](crate::ValidationResult). A
//! [`FormError`] is a fault of the surrounding stack.

use crate::field::FieldName;
use serde::{Deserialize, Serialize};
use signup_conf::FormSettings;

/// The three ways a signup submission can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	InvalidEmail,
	WeakPassword,
	PasswordMismatch,
}

impl ErrorKind {
	/// The field the error is displayed next to
	pub fn field(&self) -> FieldName {
		match self {
			ErrorKind::InvalidEmail => FieldName::Email,
			ErrorKind::WeakPassword => FieldName::Password,
			ErrorKind::PasswordMismatch => FieldName::ConfirmPassword,
		}
	}

	/// Display text for this kind under the given settings
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::FormSettings;
	/// use signup_forms::ErrorKind;
	///
	/// let settings = FormSettings::default();
	/// assert_eq!(
	///     ErrorKind::InvalidEmail.message(&settings),
	///     "The email you input is invalid."
	/// );
	/// ```
	pub fn message(&self, settings: &FormSettings) -> String {
		match self {
			ErrorKind::InvalidEmail => settings.messages.invalid_email.clone(),
			ErrorKind::WeakPassword => settings
				.messages
				.weak_password_for(settings.min_password_length),
			ErrorKind::PasswordMismatch => settings.messages.password_mismatch.clone(),
		}
	}
}

/// An error kind paired with the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
	pub kind: ErrorKind,
	pub message: String,
}

impl ErrorMessage {
	pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn field(&self) -> FieldName {
		self.kind.field()
	}
}

impl std::fmt::Display for ErrorMessage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.message)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Invalid form settings: {0}")]
	InvalidSettings(#[from] signup_conf::ValidationError),
	#[error(transparent)]
	Settings(#[from] signup_conf::SettingsError),
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ErrorKind::InvalidEmail, FieldName::Email)]
	#[case(ErrorKind::WeakPassword, FieldName::Password)]
	#[case(ErrorKind::PasswordMismatch, FieldName::ConfirmPassword)]
	fn test_error_kind_field(#[case] kind: ErrorKind, #[case] field: FieldName) {
		assert_eq!(kind.field(), field);
	}

	#[rstest]
	fn test_weak_password_message_uses_configured_length() {
		let settings = FormSettings::default().with_min_password_length(8);

		let message = ErrorKind::WeakPassword.message(&settings);

		assert_eq!(
			message,
			"The password you entered should contain 8 or more characters."
		);
	}

	#[rstest]
	fn test_error_kind_serializes_snake_case() {
		let json = serde_json::to_string(&ErrorKind::PasswordMismatch).unwrap();

		assert_eq!(json, "\"password_mismatch\"");
	}
}
