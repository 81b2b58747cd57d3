use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};
use std::io::Write;

/// Initialize the logger, `RUST_LOG` still wins over the verbosity flag
pub fn log_env_init(verbose: bool) {
    env_logger::builder()
        .format(log_formatter)
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Logging formatter function
pub fn log_formatter(
    buf: &mut Formatter,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    writeln!(buf, "{}{}", level_prefix(record.level()), record.args())
}

fn level_prefix(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    }
}
