// Shared helpers for the integration tests. Each aggregated test module
// pulls this in through `#[path]`, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub use libpn532::test_support as helpers;

/// Route `log` output through env_logger; set RUST_LOG=trace to see frames.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
