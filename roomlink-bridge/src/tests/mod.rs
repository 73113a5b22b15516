//! Testing utilities and scenario tests for the roomlink-bridge crate.


mod bridge_test;

/// Route `log` output into the test harness; safe to call repeatedly.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
