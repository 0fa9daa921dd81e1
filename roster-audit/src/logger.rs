//! Process logger
//!
//! Installs `env_logger` once per process. `ROSTER_LOG` overrides the
//! default filters using the usual `env_logger` directive syntax.

use std::sync::OnceLock;

use env_logger::{Builder, Env};
use log::LevelFilter;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the logger
///
/// Returns whether installation succeeded; it fails when the host already
/// set a global logger. Later calls repeat the first answer.
pub fn initialize_logger() -> bool {
    *INSTALLED.get_or_init(|| {
        let env = Env::new()
            .filter("ROSTER_LOG")
            .write_style("ROSTER_LOG_STYLE");

        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("roster_core", LevelFilter::Info)
            .filter_module("roster::audit", LevelFilter::Info)
            .format_timestamp_millis()
            .format_target(true)
            .parse_env(env);

        builder.try_init().is_ok()
    })
}

#[cfg(test)]
mod tests {
    use log::{debug, warn};

    use super::*;

    #[test]
    fn test_repeated_initialization_is_stable() {
        let first = initialize_logger();
        assert_eq!(initialize_logger(), first);
        debug!("filtered out by default");
        warn!("table audit sink unavailable");
    }
}
