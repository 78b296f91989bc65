//! Sample fixtures for exercising a build pipeline.
//!
//! Small library functions plus check suites that pin their expected results,
//! including values that only hold for a given build configuration (debug
//! flag, compiler identity, target platform).
//!
//! # Logging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=buildcheck=debug` - every failed check
//! - `RUST_LOG=buildcheck=trace` - every evaluated check

pub mod arith;
pub mod config;
pub mod profile;
pub mod program;
pub mod strings;
pub mod suites;

use std::sync::Once;

pub use config::{parse_args, Command, ConfigError, RunConfig, POLICY_ENV_VAR};
pub use program::{run_checks, run_suite, Outcome};
pub use suites::Suite;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG` is
/// set, so diagnostics on stderr stay clean by default.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
