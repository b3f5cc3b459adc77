//! Tracing subscriber setup.
//!
//! Structured logs are only wanted in debug mode; in normal mode the message
//! macros print plain text and no subscriber is installed.
//!
//! ```no_run
//! use oeetrack::libs::logging;
//! logging::init();
//! ```

use super::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the fmt subscriber when `OEETRACK_DEBUG` or `RUST_LOG` is set.
///
/// The filter comes from `RUST_LOG`. Without it this crate logs at `debug`
/// and dependencies at `info`.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oeetrack=debug,info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// Verbose subscriber writing through the test harness.
pub fn init_test() {
    let _ = fmt().with_env_filter(EnvFilter::new("debug")).with_test_writer().try_init();
}
