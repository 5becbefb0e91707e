//! Logging setup and the `log` macros
//!
//! Library code logs through the re-exported macros; binaries and tests call
//! [`init`] or [`init_with_level`] once to install `env_logger`.

use env_logger::{Builder, Env};

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
///
/// Ignored if a logger is already installed.
pub fn init() {
    let _ = env_logger::try_init();
}

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still takes precedence when set. Safe to call more than once;
/// later calls are ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = builder(level, Env::default()).try_init();
}

/// Logger builder where directives from `env` override `level`
fn builder(level: log::LevelFilter, env: Env<'_>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).parse_env(env);
    builder
}
