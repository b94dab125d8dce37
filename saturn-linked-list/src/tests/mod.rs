//! Crate-level tests that exercise the list through its public surface.

// NOTE: The entire module is only compiled when running tests.
#![cfg(test)]

mod model;

/// Routes `tracing` output to the test harness so clamp and lookup events show
/// up with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
