//! Logging setup
//!
//! Everything in the crate logs through the `log` facade. Binaries call
//! [`init`] once at startup to install `env_logger`, which writes to stderr.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Defaults to `info`; `RUST_LOG` overrides it. A second call is a no-op.
pub fn init() {
    let result = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
    }
}
