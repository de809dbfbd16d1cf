//! Logging for tests

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output through `env_logger` in test capture mode
///
/// Safe to call from every test; only the first call installs the logger.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=capdigest_core=trace`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
        log::debug!("test logging initialized");
    });
}
