use std::time::Duration;

use config::{Config, ConfigError, Environment};
use lsp_logging::LogFormat;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub rpc_url: String,
    pub private_key: Option<String>,
    pub log_format: LogFormat,
    pub poll_interval_ms: u64,
    pub retry_timeout_secs: u64,
}

impl Settings {
    /// Reads the defaults, overridden by `LSP_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("LSP"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("rpc_url", "https://rpc.testnet.lukso.network")?
            .set_default("log_format", "minimal")?
            .set_default("poll_interval_ms", 4_000)?
            .set_default("retry_timeout_secs", 120)?
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn retry_timeout(&self) -> Duration {
        Duration::from_secs(self.retry_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Settings::from_env(Environment::with_prefix("LSP").source(Some(vars))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]);
        assert_eq!(settings.rpc_url, "https://rpc.testnet.lukso.network");
        assert_eq!(settings.private_key, None);
        assert_eq!(settings.log_format, LogFormat::Minimal);
        assert_eq!(settings.poll_interval(), Duration::from_secs(4));
        assert_eq!(settings.retry_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_environment_overrides() {
        let settings = settings(&[
            ("LSP_RPC_URL", "http://localhost:8545"),
            ("LSP_LOG_FORMAT", "json"),
            ("LSP_POLL_INTERVAL_MS", "250"),
            ("OTHER_RPC_URL", "http://ignored"),
        ]);
        assert_eq!(settings.rpc_url, "http://localhost:8545");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.poll_interval(), Duration::from_millis(250));
    }
}
