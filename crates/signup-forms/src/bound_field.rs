use crate::error::ErrorMessage;
use crate::field::{FieldName, Widget};

/// BoundField represents a field bound to the form's current state
#[derive(Debug, Clone)]
pub struct BoundField<'a> {
	field: FieldName,
	value: &'a str,
	errors: Vec<&'a ErrorMessage>,
}

impl<'a> BoundField<'a> {
	/// Bind a field to a value and its visible errors
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, FieldName};
	///
	/// let bound = BoundField::new(FieldName::Email, "selena@gmail.com", vec![]);
	/// assert_eq!(bound.name(), "email");
	/// assert_eq!(bound.value(), "selena@gmail.com");
	/// ```
	pub fn new(field: FieldName, value: &'a str, errors: Vec<&'a ErrorMessage>) -> Self {
		Self {
			field,
			value,
			errors,
		}
	}

	pub fn field(&self) -> FieldName {
		self.field
	}

	pub fn name(&self) -> &'static str {
		self.field.as_str()
	}

	/// Get the HTML id attribute for the label
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, FieldName};
	///
	/// let bound = BoundField::new(FieldName::ConfirmPassword, "", vec![]);
	/// assert_eq!(bound.id_for_label(), "id_confirm_password");
	/// ```
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.field.as_str())
	}

	pub fn label(&self) -> &'static str {
		self.field.label()
	}

	pub fn widget(&self) -> Widget {
		self.field.widget()
	}

	pub fn value(&self) -> &'a str {
		self.value
	}

	pub fn errors(&self) -> &[&'a ErrorMessage] {
		&self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}
}
