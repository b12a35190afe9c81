//! Logging bootstrap shared by every Steel binary, bench and test harness.
//!
//! Library crates only talk to the `log` facade or open `tracing` spans. Whoever owns
//! `main` calls [`init`] once to route both into a `tracing-subscriber` formatter.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or unparsable, e.g. `"info"` or
/// `"steel_light=debug"`. Returns `false` if a subscriber was already installed, either by a
/// previous call or by someone else.
pub fn init(default_filter: &str) -> bool {
    if INSTALLED.get().is_some() {
        return false;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if installed {
        // `try_init` already bridges `log` records when the `tracing-log` feature is on.
        let _ = INSTALLED.set(());
        log::debug!("Logger initialised with default filter \"{default_filter}\"");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init("warn");
        assert!(!init("warn"));
    }
}
