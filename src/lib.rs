//! # Signup
//!
//! Client-side signup form logic (email, password, password confirmation),
//! decoupled from any rendering layer.
//!
//! A rendering surface owns a [`SignupForm`](forms::SignupForm), forwards
//! input-change events to its setters and calls `submit()` on the submit
//! action. Errors stay hidden until the first submit and are recomputed,
//! never accumulated, on every later one.
//!
//! ## Feature Flags
//!
//! - `forms` - Form state, validation pipeline and rendering metadata
//! - `conf` - Layered settings (defaults, TOML file, `SIGNUP_*` environment)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use signup::prelude::*;
//!
//! let mut form = SignupForm::new();
//! form.set_email("selena@gmail.com");
//! form.set_password("swordfish");
//! form.set_confirm_password("swordfish");
//!
//! assert!(form.submit().is_empty());
//! assert!(form.is_valid());
//! ```

#[cfg(feature = "conf")]
pub use signup_conf as conf;

#[cfg(feature = "forms")]
pub use signup_forms as forms;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use signup_forms::{
	BoundField, ErrorKind, ErrorMessage, FieldName, FormError, FormExt, FormMetadata, FormPhase,
	FormState, SignupForm, ValidationResult, validate,
};

// Re-export settings (conf feature)
#[cfg(feature = "conf")]
pub use signup_conf::{FormSettings, SettingsBuilder, SettingsError};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use signup_conf::{ErrorMessages, FormSettings, SettingsBuilder};

	#[cfg(feature = "forms")]
	pub use signup_forms::{
		ErrorKind, FieldName, FormExt, FormPhase, FormState, SignupForm, ValidationResult,
	};
}
