//! Signup form lifecycle and the submit pipeline
//!
//! A form starts pristine and hides every error until the first submit.
//! Each submit recomputes the errors from the current state.

use crate::bound_field::BoundField;
use crate::error::{ErrorMessage, FormResult};
use crate::field::FieldName;
use crate::result::ValidationResult;
use crate::state::FormState;
use crate::validators::{EmailValidator, FieldsEqualValidator, MinLengthValidator, Validator};
use serde::{Deserialize, Serialize};
use signup_conf::{FormSettings, SettingsBuilder};

/// Lifecycle of a mounted form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
	/// No submit yet; errors are never shown
	#[default]
	Pristine,
	/// Errors shown are the result of the last submit
	Submitted,
}

/// Run the signup validation pipeline against a state snapshot
///
/// All three checks run; none short-circuits another.
///
/// # Examples
///
/// ```
/// use signup_conf::FormSettings;
/// use signup_forms::{ErrorKind, FormState, validate};
///
/// let state = FormState::new("selena@gmail.com", "word", "word");
/// let result = validate(&state, &FormSettings::default());
/// assert_eq!(result.kinds(), vec![ErrorKind::WeakPassword]);
/// ```
pub fn validate(state: &FormState, settings: &FormSettings) -> ValidationResult {
	let mut result = ValidationResult::new();
	let checks = [
		EmailValidator::new().validate(state.email.as_str()),
		MinLengthValidator::new(settings.min_password_length).validate(state.password.as_str()),
		FieldsEqualValidator::new()
			.validate(&(state.password.as_str(), state.confirm_password.as_str())),
	];

	for kind in checks.into_iter().filter_map(Result::err) {
		result.push(ErrorMessage::new(kind, kind.message(settings)));
	}
	result
}

/// Signup form with email, password and password confirmation
///
/// Owns its [`FormState`] exclusively. Setters never validate; only
/// [`SignupForm::submit`] computes errors, replacing the previous result.
#[derive(Debug, Clone)]
pub struct SignupForm {
	state: FormState,
	settings: FormSettings,
	phase: FormPhase,
	result: ValidationResult,
	submit_count: usize,
}

impl SignupForm {
	/// Create an empty, pristine form with default settings
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormPhase, SignupForm};
	///
	/// let form = SignupForm::new();
	/// assert_eq!(form.email(), "");
	/// assert_eq!(form.phase(), FormPhase::Pristine);
	/// assert!(form.errors().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::from_parts(FormState::default(), FormSettings::default())
	}

	/// Create an empty form with custom settings
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::FormSettings;
	/// use signup_forms::SignupForm;
	///
	/// let form = SignupForm::with_settings(FormSettings::default().with_min_password_length(8)).unwrap();
	/// assert_eq!(form.settings().min_password_length, 8);
	///
	/// assert!(SignupForm::with_settings(FormSettings::default().with_min_password_length(0)).is_err());
	/// ```
	pub fn with_settings(settings: FormSettings) -> FormResult<Self> {
		settings.validate()?;
		Ok(Self::from_parts(FormState::default(), settings))
	}

	/// Create an empty form with settings loaded from a builder
	pub fn from_builder(builder: SettingsBuilder) -> FormResult<Self> {
		let settings = builder.build()?;
		Ok(Self::from_parts(FormState::default(), settings))
	}

	/// Create a pristine form pre-filled with a state, e.g. a deserialized submission
	pub fn from_state(state: FormState) -> Self {
		Self::from_parts(state, FormSettings::default())
	}

	fn from_parts(state: FormState, settings: FormSettings) -> Self {
		Self {
			state,
			settings,
			phase: FormPhase::Pristine,
			result: ValidationResult::new(),
			submit_count: 0,
		}
	}

	pub fn set_email(&mut self, value: impl Into<String>) {
		self.state.email = value.into();
	}

	pub fn set_password(&mut self, value: impl Into<String>) {
		self.state.password = value.into();
	}

	pub fn set_confirm_password(&mut self, value: impl Into<String>) {
		self.state.confirm_password = value.into();
	}

	/// Update one field from an input-change event
	pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
		self.state.set(field, value);
	}

	/// Validate the current state and replace the displayed errors
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{ErrorKind, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.set_email("selenagmail.com");
	/// form.set_password("swordfish");
	/// form.set_confirm_password("swordfish");
	///
	/// assert_eq!(form.submit().kinds(), vec![ErrorKind::InvalidEmail]);
	///
	/// form.set_email("selena@gmail.com");
	/// assert!(form.submit().is_empty());
	/// ```
	pub fn submit(&mut self) -> &ValidationResult {
		self.result = validate(&self.state, &self.settings);
		self.phase = FormPhase::Submitted;
		self.submit_count += 1;

		tracing::debug!(
			submission = self.submit_count,
			errors = ?self.result.kinds(),
			"signup form submitted"
		);
		&self.result
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn email(&self) -> &str {
		&self.state.email
	}

	pub fn password(&self) -> &str {
		&self.state.password
	}

	pub fn confirm_password(&self) -> &str {
		&self.state.confirm_password
	}

	pub fn value(&self, field: FieldName) -> &str {
		self.state.get(field)
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	pub fn is_submitted(&self) -> bool {
		self.phase == FormPhase::Submitted
	}

	pub fn submit_count(&self) -> usize {
		self.submit_count
	}

	/// Errors currently visible; always empty while pristine
	pub fn errors(&self) -> &[ErrorMessage] {
		match self.phase {
			FormPhase::Pristine => &[],
			FormPhase::Submitted => self.result.as_slice(),
		}
	}

	/// `true` only after a submit that produced no errors
	pub fn is_valid(&self) -> bool {
		self.is_submitted() && self.result.is_empty()
	}

	/// Pair a field with its value and visible errors for rendering
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.set_password("word");
	/// form.submit();
	///
	/// let bound = form.bound_field(FieldName::Password);
	/// assert_eq!(bound.value(), "word");
	/// assert!(bound.has_errors());
	/// ```
	pub fn bound_field(&self, field: FieldName) -> BoundField<'_> {
		let errors = self.errors().iter().filter(|e| e.field() == field).collect();
		BoundField::new(field, self.state.get(field), errors)
	}

	pub fn bound_fields(&self) -> Vec<BoundField<'_>> {
		FieldName::ALL
			.into_iter()
			.map(|field| self.bound_field(field))
			.collect()
	}
}

impl Default for SignupForm {
	fn default() -> Self {
		Self::new()
	}
}
