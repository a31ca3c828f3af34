//! Serializable form metadata for client-side rendering
//!
//! A rendering surface (WASM component, server template) receives a
//! [`FormMetadata`] instead of the [`SignupForm`] itself. The embedded
//! [`ValidationRule`]s let it give immediate feedback while typing; the
//! errors that count are still the ones produced by `submit()`.
//!
//! ## Example
//!
//! ```
//! use signup_forms::SignupForm;
//! use signup_forms::wasm_compat::{FormExt, FormMetadata};
//!
//! let form = SignupForm::new();
//! let metadata: FormMetadata = form.to_metadata();
//!
//! let json = metadata.to_json().unwrap();
//! assert!(json.contains("\"confirm_password\""));
//! ```

use crate::error::{ErrorMessage, FormResult};
use crate::field::{FieldName, Widget};
use crate::form::{FormPhase, SignupForm};
use crate::validators::EmailValidator;
use serde::{Deserialize, Serialize};

/// Validation rule types for client-side validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationRule {
	/// Field must match a regular expression
	Pattern {
		field_name: String,
		pattern: String,
		error_message: String,
	},
	/// Field must have at least `min` characters
	MinLength {
		field_name: String,
		min: usize,
		error_message: String,
	},
	/// Two fields must hold identical values
	FieldsEqual {
		field_names: Vec<String>,
		error_message: String,
		/// Field the error is displayed next to
		target_field: String,
	},
}

/// Serializable field metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Field name (form data key)
	pub name: String,

	/// Human-readable label
	pub label: String,

	/// Widget type for rendering
	pub widget: Widget,

	/// Current value, `None` for password inputs
	#[serde(default)]
	pub value: Option<String>,

	/// Visible error messages for this field
	#[serde(default)]
	pub errors: Vec<String>,
}

/// Serializable snapshot of a signup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
	pub fields: Vec<FieldMetadata>,

	pub phase: FormPhase,

	/// Visible errors, empty while pristine
	pub errors: Vec<ErrorMessage>,

	#[serde(default)]
	pub validation_rules: Vec<ValidationRule>,
}

impl FormMetadata {
	pub fn to_json(&self) -> FormResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn from_json(json: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn field(&self, name: FieldName) -> Option<&FieldMetadata> {
		self.fields.iter().find(|f| f.name == name.as_str())
	}
}

/// Extension trait for SignupForm to extract metadata
pub trait FormExt {
	/// Extract serializable metadata from the form
	fn to_metadata(&self) -> FormMetadata;

	/// Client-side rules mirroring the submit pipeline
	fn validation_rules(&self) -> Vec<ValidationRule>;
}

impl FormExt for SignupForm {
	fn to_metadata(&self) -> FormMetadata {
		let fields = self
			.bound_fields()
			.into_iter()
			.map(|bound| FieldMetadata {
				name: bound.name().to_string(),
				label: bound.label().to_string(),
				widget: bound.widget(),
				value: match bound.widget() {
					Widget::PasswordInput => None,
					Widget::EmailInput => Some(bound.value().to_string()),
				},
				errors: bound.errors().iter().map(|e| e.message.clone()).collect(),
			})
			.collect();

		FormMetadata {
			fields,
			phase: self.phase(),
			errors: self.errors().to_vec(),
			validation_rules: self.validation_rules(),
		}
	}

	fn validation_rules(&self) -> Vec<ValidationRule> {
		let settings = self.settings();
		vec![
			ValidationRule::Pattern {
				field_name: FieldName::Email.as_str().to_string(),
				pattern: EmailValidator::pattern().to_string(),
				error_message: settings.messages.invalid_email.clone(),
			},
			ValidationRule::MinLength {
				field_name: FieldName::Password.as_str().to_string(),
				min: settings.min_password_length,
				error_message: settings
					.messages
					.weak_password_for(settings.min_password_length),
			},
			ValidationRule::FieldsEqual {
				field_names: vec![
					FieldName::Password.as_str().to_string(),
					FieldName::ConfirmPassword.as_str().to_string(),
				],
				error_message: settings.messages.password_mismatch.clone(),
				target_field: FieldName::ConfirmPassword.as_str().to_string(),
			},
		]
	}
}
