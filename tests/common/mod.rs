//! Shared helpers for integration tests

use chess_board::Coordinate;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sq(file: char, rank: u8) -> Coordinate {
    Coordinate::new(file, rank).unwrap()
}
