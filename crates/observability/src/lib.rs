//! Tracing/logging setup shared by binaries and test harnesses.

pub mod subscriber;

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init();
}

pub use subscriber::init_json;
