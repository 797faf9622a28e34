use log::LevelFilter;

/// Level names accepted in config and on the command line.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parse log level string to LevelFilter
pub fn parse_level(level_str: &str) -> LevelFilter {
    match level_str.trim().to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Initialize the stderr logger. `RUST_LOG`, when set, wins over `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(parse_level(level))
        .format_timestamp(None)
        .parse_default_env();
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" ERROR "), LevelFilter::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert_eq!(parse_level("chatty"), LevelFilter::Warn);
    }

    #[test]
    fn every_listed_level_parses() {
        for name in LEVELS {
            assert_eq!(
                parse_level(name).to_string().to_lowercase(),
                name.to_string()
            );
        }
    }
}
