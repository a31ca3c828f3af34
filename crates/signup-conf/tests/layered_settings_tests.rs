//! Layered settings tests
//!
//! Exercises the process environment, so every test runs serially.

use rstest::rstest;
use serial_test::serial;
use signup_conf::{FormSettings, SettingsBuilder, SettingsError};
use std::env;
use tempfile::TempDir;

const LENGTH_KEY: &str = "SIGNUP_MIN_PASSWORD_LENGTH";
const MISMATCH_KEY: &str = "SIGNUP_MESSAGES_PASSWORD_MISMATCH";

fn clear_env() {
	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// These tests use #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var(LENGTH_KEY);
		env::remove_var(MISMATCH_KEY);
	}
}

#[rstest]
#[serial(signup_env)]
fn test_layered_without_file_or_env_uses_defaults() {
	clear_env();
	let temp_dir = TempDir::new().unwrap();

	let settings = SettingsBuilder::layered(temp_dir.path().join("missing.toml"))
		.build()
		.unwrap();

	assert_eq!(settings, FormSettings::default());
}

#[rstest]
#[serial(signup_env)]
fn test_env_overrides_file() {
	// Arrange
	clear_env();
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("signup.toml");
	std::fs::write(
		&path,
		"min_password_length = 6\n\n[messages]\npassword_mismatch = \"From file\"\ninvalid_email = \"Bad email\"\n",
	)
	.unwrap();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var(MISMATCH_KEY, "From env");
	}

	// Act
	let settings = SettingsBuilder::layered(&path).build();
	clear_env();
	let settings = settings.unwrap();

	// Assert
	assert_eq!(settings.min_password_length, 6);
	assert_eq!(settings.messages.password_mismatch, "From env");
	assert_eq!(settings.messages.invalid_email, "Bad email");
}

#[rstest]
#[serial(signup_env)]
fn test_malformed_env_value_is_reported() {
	clear_env();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var(LENGTH_KEY, "five");
	}

	let result = SettingsBuilder::layered("missing.toml").build();
	clear_env();

	assert!(matches!(result, Err(SettingsError::Source { .. })));
}

#[cfg(unix)]
#[rstest]
#[serial(signup_env)]
fn test_non_unicode_unrelated_variable_is_skipped() {
	use std::ffi::OsString;
	use std::os::unix::ffi::OsStringExt;

	// Arrange
	clear_env();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("UNRELATED_BINARY", OsString::from_vec(vec![0xff, 0xfe]));
		env::set_var(LENGTH_KEY, "7");
	}

	// Act
	let result = SettingsBuilder::layered("missing.toml").build();
	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var("UNRELATED_BINARY");
	}
	clear_env();

	// Assert
	assert_eq!(result.unwrap().min_password_length, 7);
}

#[cfg(unix)]
#[rstest]
#[serial(signup_env)]
fn test_non_unicode_signup_value_is_reported() {
	use std::ffi::OsString;
	use std::os::unix::ffi::OsStringExt;

	clear_env();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var(MISMATCH_KEY, OsString::from_vec(vec![0xff, 0xfe]));
	}

	let result = SettingsBuilder::layered("missing.toml").build();
	clear_env();

	let err = result.unwrap_err();
	assert!(matches!(
		err,
		SettingsError::Source {
			source: signup_conf::SourceError::InvalidValue { ref key, .. },
			..
		} if key == MISMATCH_KEY
	));
}
