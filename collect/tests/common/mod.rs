use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `tracing` output to the test harness.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}
