//! Tracing setup for tests
//!
//! Installs a `fmt` subscriber that writes through the test harness so log
//! output is captured per test. `RUST_LOG` overrides the default `warn` level.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another crate's tests may already have installed a global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_test_writer())
        .try_init();
});

/// Initializes tracing for the current test process; safe to call repeatedly
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
