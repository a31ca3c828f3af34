//! Signup form fields

use serde::{Deserialize, Serialize};

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// HTML `type` attribute for the input element
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}
}

/// One of the three text inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
	Email,
	Password,
	ConfirmPassword,
}

impl FieldName {
	/// All fields in display order
	pub const ALL: [FieldName; 3] = [
		FieldName::Email,
		FieldName::Password,
		FieldName::ConfirmPassword,
	];

	/// Form data key
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FieldName;
	///
	/// assert_eq!(FieldName::ConfirmPassword.as_str(), "confirm_password");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::Email => "email",
			FieldName::Password => "password",
			FieldName::ConfirmPassword => "confirm_password",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			FieldName::Email => "Email address",
			FieldName::Password => "Password",
			FieldName::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			FieldName::Email => Widget::EmailInput,
			FieldName::Password | FieldName::ConfirmPassword => Widget::PasswordInput,
		}
	}

	/// Look up a field by its form data key
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|field| field.as_str() == name)
	}
}

impl std::fmt::Display for FieldName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
