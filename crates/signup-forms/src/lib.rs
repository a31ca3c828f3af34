//! Signup form state and validation
//!
//! This crate models a three-field signup form (email, password, password
//! confirmation) independently of any rendering layer:
//! - Plain setters for input-change events, with no validation side effects
//! - A submit pipeline of three independent checks
//! - A pristine/submitted lifecycle deciding whether errors are visible
//! - Bound fields and serializable metadata for rendering surfaces
//!
//! ```
//! use signup_forms::{ErrorKind, SignupForm};
//!
//! let mut form = SignupForm::new();
//! form.set_email("selena@gmail.com");
//! form.set_password("swordfish");
//! form.set_confirm_password("sword");
//!
//! assert!(form.errors().is_empty());
//! assert_eq!(form.submit().kinds(), vec![ErrorKind::PasswordMismatch]);
//! ```

pub mod bound_field;
pub mod error;
pub mod field;
pub mod form;
pub mod result;
pub mod state;
pub mod validators;
pub mod wasm_compat;

pub use bound_field::BoundField;
pub use error::{ErrorKind, ErrorMessage, FormError, FormResult};
pub use field::{FieldName, Widget};
pub use form::{FormPhase, SignupForm, validate};
pub use result::ValidationResult;
pub use state::FormState;
pub use validators::{EmailValidator, FieldsEqualValidator, MinLengthValidator, Validator};
pub use wasm_compat::{FieldMetadata, FormExt, FormMetadata, ValidationRule};
