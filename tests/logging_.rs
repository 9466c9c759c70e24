//! Not a test: shared one-time log initialization for the integration test crates.

use std::sync::Once;

static INITIALIZED: Once = Once::new();

pub fn init() {
	INITIALIZED.call_once(|| {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_test_writer()
			.init();
	});
}
