#![deny(missing_docs)]
//! Shared logging utilities for the OceanDash workspace.
//!
//! This crate provides the `ocean_*` logging macros used across the codebase,
//! a thread-local simulated clock that tags log output with virtual time, and
//! a minimal test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the current simulated time in milliseconds.
    static SIM_MILLIS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the simulated time for the current thread.
/// The virtual scheduler calls this every time it moves its clock.
pub fn set_sim_millis(millis: u64) {
    SIM_MILLIS.with(|v| v.set(millis));
}

/// Retrieves the simulated time for the current thread.
/// Returns 0 if no virtual clock has run on this thread.
pub fn sim_millis() -> u64 {
    SIM_MILLIS.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the simulated time.
#[macro_export]
macro_rules! ocean_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[t+{}ms] {}", $crate::sim_millis(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the simulated time.
#[macro_export]
macro_rules! ocean_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[t+{}ms] {}", $crate::sim_millis(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the simulated time.
#[macro_export]
macro_rules! ocean_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[t+{}ms] {}", $crate::sim_millis(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the simulated time.
#[macro_export]
macro_rules! ocean_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[t+{}ms] {}", $crate::sim_millis(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the simulated time.
#[macro_export]
macro_rules! ocean_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[t+{}ms] {}", $crate::sim_millis(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
