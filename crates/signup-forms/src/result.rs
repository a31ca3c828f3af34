//! Result of one submit evaluation

use crate::error::{ErrorKind, ErrorMessage};
use crate::field::FieldName;
use serde::{Deserialize, Serialize};

/// Ordered set of at most three error messages
///
/// Order follows the pipeline: invalid email, weak password, mismatch.
/// Each kind appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
	errors: Vec<ErrorMessage>,
}

impl ValidationResult {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn push(&mut self, error: ErrorMessage) {
		debug_assert!(!self.contains(error.kind));
		debug_assert!(self.errors.last().is_none_or(|last| last.kind < error.kind));
		self.errors.push(error);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn contains(&self, kind: ErrorKind) -> bool {
		self.errors.iter().any(|e| e.kind == kind)
	}

	pub fn get(&self, kind: ErrorKind) -> Option<&ErrorMessage> {
		self.errors.iter().find(|e| e.kind == kind)
	}

	/// Error kinds in pipeline order
	pub fn kinds(&self) -> Vec<ErrorKind> {
		self.errors.iter().map(|e| e.kind).collect()
	}

	pub fn messages(&self) -> Vec<&str> {
		self.errors.iter().map(|e| e.message.as_str()).collect()
	}

	/// Errors displayed next to one field
	pub fn for_field(&self, field: FieldName) -> impl Iterator<Item = &ErrorMessage> {
		self.errors.iter().filter(move |e| e.field() == field)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ErrorMessage> {
		self.errors.iter()
	}

	pub fn as_slice(&self) -> &[ErrorMessage] {
		&self.errors
	}
}

impl<'a> IntoIterator for &'a ValidationResult {
	type Item = &'a ErrorMessage;
	type IntoIter = std::slice::Iter<'a, ErrorMessage>;

	fn into_iter(self) -> Self::IntoIter {
		self.errors.iter()
	}
}
