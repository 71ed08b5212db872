//! Driver configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! `CRUCK_*` environment variables, then command-line flags.
//!
//! | Variable | Flag | Meaning |
//! |---|---|---|
//! | `CRUCK_MAX_STEPS` (number or `none`) | `--max-steps=N`, `--no-step-limit` | step budget |
//! | `CRUCK_TIMEOUT_MS` | `--timeout-ms=N` | wall-clock budget |
//! | `CRUCK_REQUIRE_MAIN` (`1`/`true`) | `--require-main` | reject sources without `func main()` |
//! | | `--color=auto\|always\|never` | diagnostic colors |

use std::time::Duration;

use cruck_diagnostic::emitter::ColorMode;
use cruck_eval::{EntryPolicy, RunConfig};
use thiserror::Error;

/// Invalid configuration value.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {setting}: expected a non-negative integer")]
    InvalidNumber { setting: String, value: String },
    #[error("invalid value `{value}` for {setting}: expected `true` or `false`")]
    InvalidBool { setting: String, value: String },
    #[error("invalid color mode `{0}`: expected `auto`, `always` or `never`")]
    InvalidColor(String),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
}

/// Everything a driver command needs to know.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CliConfig {
    pub run: RunConfig,
    pub color: ColorMode,
}

fn parse_number(setting: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        setting: setting.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(setting: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            setting: setting.to_owned(),
            value: value.to_owned(),
        }),
    }
}

impl CliConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with variables read through `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(value) = lookup("CRUCK_MAX_STEPS") {
            config.run.limits.max_steps = if value.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_number("CRUCK_MAX_STEPS", &value)?)
            };
        }
        if let Some(value) = lookup("CRUCK_TIMEOUT_MS") {
            let ms = parse_number("CRUCK_TIMEOUT_MS", &value)?;
            config.run.limits.timeout = Some(Duration::from_millis(ms));
        }
        if let Some(value) = lookup("CRUCK_REQUIRE_MAIN") {
            if parse_bool("CRUCK_REQUIRE_MAIN", &value)? {
                config.run.entry = EntryPolicy::Require;
            }
        }

        Ok(config)
    }

    /// Apply one `--flag`. Returns `Ok(false)` for arguments that are not
    /// flags (positional arguments).
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, ConfigError> {
        if !arg.starts_with("--") {
            return Ok(false);
        }

        if let Some(value) = arg.strip_prefix("--max-steps=") {
            self.run.limits.max_steps = Some(parse_number("--max-steps", value)?);
        } else if arg == "--no-step-limit" {
            self.run.limits.max_steps = None;
        } else if let Some(value) = arg.strip_prefix("--timeout-ms=") {
            let ms = parse_number("--timeout-ms", value)?;
            self.run.limits.timeout = Some(Duration::from_millis(ms));
        } else if arg == "--require-main" {
            self.run.entry = EntryPolicy::Require;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            self.color =
                ColorMode::parse(value).ok_or_else(|| ConfigError::InvalidColor(value.to_owned()))?;
        } else {
            return Err(ConfigError::UnknownFlag(arg.to_owned()));
        }
        Ok(true)
    }

    /// Apply every flag in `args`, returning the positional arguments.
    pub fn apply_args<'a>(&mut self, args: &'a [String]) -> Result<Vec<&'a str>, ConfigError> {
        let mut positional = Vec::new();
        for arg in args {
            if !self.apply_flag(arg)? {
                positional.push(arg.as_str());
            }
        }
        Ok(positional)
    }
}
