use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt as layer_fmt,
    prelude::*,
    EnvFilter,
};

/// Dependencies whose output is capped at `warn`.
const NOISY_TARGETS: &[&str] = &[
    "hyper",
    "hyper_util",
    "tower",
    "reqwest",
    "h2",
    "rustls",
    "alloy_rpc_client",
    "alloy_transport_http",
    "alloy_provider",
    "alloy_pubsub",
];

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[serde(alias = "Pretty")]
    Pretty,
    #[serde(alias = "Json")]
    Json,
    #[default]
    #[serde(alias = "Minimal")]
    Minimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log format '{0}', expected one of: pretty, json, minimal")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "minimal" => Ok(Self::Minimal),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

/// Builds the filter: `RUST_LOG` when set, `info` otherwise, with dependencies capped at `warn`.
fn env_filter() -> EnvFilter {
    NOISY_TARGETS
        .iter()
        .filter_map(|target| format!("{target}=warn").parse::<Directive>().ok())
        .fold(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
            EnvFilter::add_directive,
        )
}

/// Initializes the logging system.
///
/// Filters out crate dependencies to reduce noise. Calling it again after a subscriber was
/// installed does nothing.
pub fn init(log_format: LogFormat) {
    let base = tracing_subscriber::registry().with(env_filter());

    let _ = match log_format {
        LogFormat::Pretty => base.with(layer_fmt::layer().pretty()).try_init(),
        LogFormat::Json => base.with(layer_fmt::layer().json()).try_init(),
        LogFormat::Minimal => base
            .with(
                layer_fmt::layer()
                    .with_target(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_level(true)
                    .compact(),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::Minimal.to_string().parse::<LogFormat>().unwrap(), LogFormat::Minimal);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_deserialize_log_format() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        let format: LogFormat = serde_json::from_str("\"Pretty\"").unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn test_noisy_targets_are_valid_directives() {
        for target in NOISY_TARGETS {
            assert!(format!("{target}=warn").parse::<Directive>().is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogFormat::Minimal);
        init(LogFormat::Json);
    }
}
