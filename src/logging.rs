#![cfg(feature = "std")]

use std::env;
use std::string::String;

use log::{LevelFilter, Metadata, Record};

const LOG_ENV: &str = "CONNECT_FOUR_LOG";

/// Writes this crate's records to stderr, away from the rendered board.
/// Records from other crates are dropped.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `[LEVEL module] message`, with the crate prefix trimmed from the module.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target
        .strip_prefix(env!("CARGO_CRATE_NAME"))
        .map(|rest| rest.trim_start_matches("::"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(target);
    format!("[{:<5} {}] {}", record.level(), module, record.args())
}

/// Initialize logging with a level taken from `CONNECT_FOUR_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`). Defaults to `warn`.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn formats_module_relative_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Debug)
                .target("connect_four::board")
                .args(format_args!("player 0 placed at column 3 row 0"))
                .build(),
        );
        assert_eq!(line, "[DEBUG board] player 0 placed at column 3 row 0");
    }

    #[test]
    fn keeps_crate_root_and_foreign_targets() {
        let root = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("connect_four")
                .args(format_args!("result: Tie"))
                .build(),
        );
        assert_eq!(root, "[INFO  connect_four] result: Tie");

        let foreign = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("other")
                .args(format_args!("x"))
                .build(),
        );
        assert_eq!(foreign, "[WARN  other] x");
    }
}
