use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level used when `SEABATTLE_LOG` is unset or unparsable. Anything chattier
/// would interleave with the board display.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Logs go to stderr.
pub fn init_logging() {
    let level = parse_level(env::var("SEABATTLE_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_level() {
        assert_eq!(parse_level(None), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("loud")), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    }
}
