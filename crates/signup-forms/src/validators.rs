//! Field validators composing the signup pipeline
//!
//! Each validator reports the [`ErrorKind`] it is responsible for.

use crate::error::ErrorKind;
use regex::Regex;
use std::sync::LazyLock;

// Conventional `local@domain.tld`:
// - exactly one `@`
// - non-empty local part
// - domain of at least two dot-separated labels, none of them empty
// - no whitespace anywhere
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> Result<(), ErrorKind>;
}

/// Validates that a string looks like an email address
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("selena@gmail.com").is_ok());
/// assert!(validator.validate("selenagmail.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}

	/// Pattern shared with client-side renderers
	pub fn pattern() -> &'static str {
		EMAIL_REGEX.as_str()
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> Result<(), ErrorKind> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ErrorKind::InvalidEmail)
		}
	}
}

/// Validates that a password has at least `min` characters
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{MinLengthValidator, Validator};
///
/// let validator = MinLengthValidator::new(5);
/// assert!(validator.validate("sword").is_ok());
/// assert!(validator.validate("word").is_err());
/// assert!(validator.validate("").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	pub fn new(min: usize) -> Self {
		Self { min }
	}

	pub fn min(&self) -> usize {
		self.min
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> Result<(), ErrorKind> {
		if value.chars().count() >= self.min {
			Ok(())
		} else {
			Err(ErrorKind::WeakPassword)
		}
	}
}

/// Validates that two values are byte-for-byte equal
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{FieldsEqualValidator, Validator};
///
/// let validator = FieldsEqualValidator::new();
/// assert!(validator.validate(&("swordfish", "swordfish")).is_ok());
/// assert!(validator.validate(&("swordfish", "Swordfish")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldsEqualValidator;

impl FieldsEqualValidator {
	pub fn new() -> Self {
		Self
	}
}

impl<'a> Validator<(&'a str, &'a str)> for FieldsEqualValidator {
	fn validate(&self, value: &(&'a str, &'a str)) -> Result<(), ErrorKind> {
		let (first, second) = *value;
		if first.as_bytes() == second.as_bytes() {
			Ok(())
		} else {
			Err(ErrorKind::PasswordMismatch)
		}
	}
}
