//! Linkchain command-line driver.
//!
//! A thin external caller of `linkchain_core`: it turns positional arguments
//! into chain operations and prints the rendered result.
//!
//! # Debugging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=linkchain_core=trace` - growth operations
//! - `RUST_LOG=linkchain_core=debug` - rejected operations only
//! - `RUST_LOG=linkchain_cli=debug` - command dispatch

pub mod commands;

use std::sync::Once;

pub use commands::{run, usage, CliError, Command};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
