//! Logger setup for the binary.
//!
//! `-q` keeps errors only, the default shows warnings, `-vv` adds info and
//! anything above that turns on debug output. `HIREHUB_LOG` takes
//! `env_logger` filter directives and overrides the flag-derived level.

use std::io::Write;

use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Environment variable holding `env_logger` filter directives.
pub const LOG_ENV: &str = "HIREHUB_LOG";

/// Map the CLI verbosity to a log level.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// A builder printing `[LEVEL] message` lines at the given verbosity.
pub fn logger_builder(verbosity: u8) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_filter(verbosity))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .parse_env(Env::new().filter(LOG_ENV));
    builder
}

/// Install the global logger. Fails if one is already installed.
pub fn init_logging(verbosity: u8) -> Result<(), SetLoggerError> {
    logger_builder(verbosity).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), LevelFilter::Error);
        assert_eq!(level_filter(1), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Info);
        assert_eq!(level_filter(3), LevelFilter::Debug);
        assert_eq!(level_filter(u8::MAX), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_level() {
        let logger = logger_builder(2).build();
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(logger.filter(), LevelFilter::Info);
        }
    }
}
