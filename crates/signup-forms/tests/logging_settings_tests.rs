//! Settings integration and submit logging tests

use rstest::rstest;
use signup_conf::{SettingsBuilder, TomlFileSource};
use signup_forms::{ErrorKind, FormError, SignupForm};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[rstest]
fn test_form_from_toml_settings() {
	// Arrange
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("signup.toml");
	std::fs::write(
		&path,
		"min_password_length = 12\n\n[messages]\nweak_password = \"At least {min} characters, please.\"\n",
	)
	.unwrap();
	let builder = SettingsBuilder::new().add_source(TomlFileSource::new(&path));

	// Act
	let mut form = SignupForm::from_builder(builder).unwrap();
	form.set_email("selena@gmail.com");
	form.set_password("swordfish");
	form.set_confirm_password("swordfish");
	let result = form.submit();

	// Assert
	assert_eq!(result.kinds(), vec![ErrorKind::WeakPassword]);
	assert_eq!(result.messages(), vec!["At least 12 characters, please."]);
}

#[rstest]
fn test_form_from_invalid_settings_file() {
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("signup.toml");
	std::fs::write(&path, "min_password_length = 0").unwrap();

	let result = SignupForm::from_builder(SettingsBuilder::new().add_source(TomlFileSource::new(&path)));

	assert!(matches!(result, Err(FormError::Settings(_))));
}

#[rstest]
fn test_submit_emits_debug_event() {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	// Arrange
	/// A tracing layer that captures event messages and fields
	struct LogCapture {
		logs: Arc<Mutex<Vec<String>>>,
	}

	impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
		fn on_event(
			&self,
			event: &tracing::Event<'_>,
			_ctx: tracing_subscriber::layer::Context<'_, S>,
		) {
			struct FieldVisitor {
				fields: Vec<String>,
			}

			impl tracing::field::Visit for FieldVisitor {
				fn record_debug(
					&mut self,
					field: &tracing::field::Field,
					value: &dyn std::fmt::Debug,
				) {
					self.fields.push(format!("{}={:?}", field.name(), value));
				}
			}

			let mut visitor = FieldVisitor { fields: Vec::new() };
			event.record(&mut visitor);

			let mut logs = self.logs.lock().unwrap();
			logs.push(format!(
				"[{}] {}",
				event.metadata().level(),
				visitor.fields.join(" ")
			));
		}
	}

	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let _guard = tracing_subscriber::registry().with(capture).set_default();

	let mut form = SignupForm::new();
	form.set_email("selenagmail.com");

	// Act
	form.submit();

	// Assert
	let captured = logs.lock().unwrap();
	let event = captured
		.iter()
		.find(|log| log.contains("signup form submitted"))
		.expect("submit should log a debug event");
	assert!(event.starts_with("[DEBUG]"));
	assert!(event.contains("submission=1"));
	assert!(event.contains("InvalidEmail"));
}
