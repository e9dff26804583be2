//! Logging setup.
//!
//! Without `-v` the `log4rs.yml` file config is used when present. With `-v`,
//! or when the file is missing, logs go to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Map the `-v` count to a log level. No flag means warnings only.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger. Safe to call once per process.
pub fn init(verbose: u8) {
    if verbose == 0 && log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_for(verbose)));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing log4rs: {e}");
            }
        }
        Err(e) => eprintln!("Error building log4rs config: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
