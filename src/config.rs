//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded first by `main`)
//! and can be overridden by command line flags.

use crate::cli::Cli;
use crate::output::DEFAULT_FILENAME;
use chrono_tz::Tz;
use std::error::Error;

pub const ENV_DEFAULT_FILENAME: &str = "VLSM_DEFAULT_FILENAME";
pub const ENV_TIMEZONE: &str = "VLSM_TIMEZONE";
pub const ENV_NO_COLOR: &str = "VLSM_NO_COLOR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Spreadsheet name used when the user enters none.
    pub default_filename: String,
    /// Timezone for the spreadsheet timestamp.
    pub timezone: Tz,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_filename: DEFAULT_FILENAME.to_string(),
            timezone: Tz::UTC,
            no_color: false,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through `get`, which maps a variable name to its value.
    pub fn from_vars<F>(get: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(name) = get(ENV_DEFAULT_FILENAME).filter(|v| !v.trim().is_empty()) {
            config.default_filename = name.trim().to_string();
        }
        if let Some(tz) = get(ENV_TIMEZONE).filter(|v| !v.trim().is_empty()) {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("Invalid {ENV_TIMEZONE} '{tz}': {e}"))?;
        }
        if let Some(flag) = get(ENV_NO_COLOR) {
            config.no_color = is_truthy(&flag);
        }

        log::debug!("Config from environment: {config:?}");
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Config {
        if cli.no_color {
            self.no_color = true;
        }
        self
    }

    /// Current time formatted for the spreadsheet title block.
    pub fn timestamp(&self) -> String {
        chrono::Utc::now()
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
