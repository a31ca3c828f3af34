//! Raw form input

use crate::field::FieldName;
use serde::{Deserialize, Serialize};

/// Snapshot of the three text inputs
///
/// Fields are independent while typing; any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormState {
	pub fn new(
		email: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}

	pub fn get(&self, field: FieldName) -> &str {
		match field {
			FieldName::Email => &self.email,
			FieldName::Password => &self.password,
			FieldName::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
		let value = value.into();
		match field {
			FieldName::Email => self.email = value,
			FieldName::Password => self.password = value,
			FieldName::ConfirmPassword => self.confirm_password = value,
		}
	}
}
