//! Configuration module for the FSA scanner
//!
//! Alphabet constants are fixed at compile time; user-facing preferences are
//! resolved at runtime from environment variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{LoggingPreferences, RuntimeConfig, ScannerPreferences};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the crate version the scanner was built from
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "development"
        } else {
            "release"
        }
    }
}
