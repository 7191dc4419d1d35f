use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber for tests. Safe to call from every
/// test; only the first call has any effect.
pub fn init_test_setup() {
    TEST_SETUP.call_once(setup_test_logging);
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter),
    );

    if subscriber.try_init().is_err() {
        debug!("tracing subscriber already set");
    }
}
