//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sensordash.toml` in the working directory (or the path in
//! `SENSORDASH_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use sensordash_adapter_virtual::VirtualConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "sensordash.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sensor polling settings.
    pub sensors: SensorsConfig,
    /// Live dashboard settings.
    pub dashboard: DashboardConfig,
    /// Environment overrides that were present but could not be applied.
    #[serde(skip)]
    pub rejected_overrides: Vec<RejectedOverride>,
}

/// An environment override whose value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Environment variable name.
    pub key: &'static str,
    /// Raw value as found in the environment.
    pub value: String,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Sensor polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    /// Seconds between two polls of the sensor source.
    pub poll_interval_secs: u64,
    /// Enable the simulated weather station.
    pub virtual_enabled: bool,
    /// Simulated weather station baselines.
    #[serde(rename = "virtual")]
    pub virtual_station: VirtualConfig,
}

/// Live dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `<meta http-equiv="refresh">` interval of the `/live` page.
    pub refresh_seconds: u32,
}

impl Config {
    /// Load configuration from `sensordash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup("SENSORDASH_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SENSORDASH_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("SENSORDASH_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => self.reject("SENSORDASH_PORT", val),
            }
        }
        if let Some(val) = lookup("SENSORDASH_BIND") {
            let parsed = val
                .rsplit_once(':')
                .and_then(|(host, port)| Some((host.to_string(), port.parse::<u16>().ok()?)));
            match parsed {
                Some((host, port)) => {
                    self.server.host = host;
                    self.server.port = port;
                }
                None => self.reject("SENSORDASH_BIND", val),
            }
        }
        if let Some(val) = lookup("SENSORDASH_POLL_INTERVAL") {
            match val.parse() {
                Ok(secs) => self.sensors.poll_interval_secs = secs,
                Err(_) => self.reject("SENSORDASH_POLL_INTERVAL", val),
            }
        }
        if let Some(val) = lookup("SENSORDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn reject(&mut self, key: &'static str, value: String) {
        self.rejected_overrides.push(RejectedOverride { key, value });
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.sensors.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sensors.poll_interval_secs must be non-zero".to_string(),
            ));
        }
        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "dashboard.refresh_seconds must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the sensor polling period.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.sensors.poll_interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensordashd=info,sensordash=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5,
            virtual_enabled: true,
            virtual_station: VirtualConfig::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { refresh_seconds: 5 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.sensors.poll_interval_secs, 5);
        assert!(config.sensors.virtual_enabled);
        assert_eq!(config.dashboard.refresh_seconds, 5);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [sensors]
            poll_interval_secs = 30
            virtual_enabled = false

            [sensors.virtual]
            base_temperature_c = 18.5
            base_humidity = 60.0
            base_pressure_hpa = 1000.0

            [dashboard]
            refresh_seconds = 15
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.sensors.poll_interval_secs, 30);
        assert!(!config.sensors.virtual_enabled);
        assert!((config.sensors.virtual_station.base_temperature_c - 18.5).abs() < f64::EPSILON);
        assert_eq!(config.dashboard.refresh_seconds, 15);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.sensors.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_refresh() {
        let mut config = Config::default();
        config.dashboard.refresh_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_override_host_and_port_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("SENSORDASH_HOST", "127.0.0.1"),
            ("SENSORDASH_PORT", "3000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn should_override_bind_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_BIND", "192.168.1.20:80")]));
        assert_eq!(config.server.host, "192.168.1.20");
        assert_eq!(config.server.port, 80);
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_PORT", "http")]));
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.rejected_overrides,
            vec![RejectedOverride {
                key: "SENSORDASH_PORT",
                value: "http".to_string(),
            }]
        );
    }

    #[test]
    fn should_reject_bind_override_without_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_BIND", "192.168.1.20")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.rejected_overrides.len(), 1);
        assert_eq!(config.rejected_overrides[0].key, "SENSORDASH_BIND");
    }

    #[test]
    fn should_reject_bind_override_with_bad_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_BIND", "10.0.0.1:web")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.rejected_overrides[0].value, "10.0.0.1:web");
    }

    #[test]
    fn should_reject_unparsable_poll_interval_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_POLL_INTERVAL", "5s")]));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.rejected_overrides[0].key, "SENSORDASH_POLL_INTERVAL");
    }

    #[test]
    fn should_not_record_valid_overrides_as_rejected() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("SENSORDASH_BIND", "127.0.0.1:3000"),
            ("SENSORDASH_POLL_INTERVAL", "10"),
        ]));
        assert!(config.rejected_overrides.is_empty());
    }

    #[test]
    fn should_override_poll_interval_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_POLL_INTERVAL", "60")]));
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn should_prefer_rust_log_over_sensordash_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORDASH_LOG", "info"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_parse_error_for_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensordash.toml");
        std::fs::write(&path, "[server\nport = 'eighty'").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_return_io_error_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Config::from_file(dir.path()), Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_load_file_named_by_sensordash_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[server]\nport = 9191\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let config = Config::load_from(env(&[("SENSORDASH_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.server.port, 9191);
    }

    #[test]
    fn should_apply_env_on_top_of_file_named_by_sensordash_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[server]\nport = 9191\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let config = Config::load_from(env(&[
            ("SENSORDASH_CONFIG", path.as_str()),
            ("SENSORDASH_PORT", "9292"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9292);
    }

    #[test]
    fn should_fail_load_when_sensordash_config_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "port = = 1").unwrap();
        let path = path.to_string_lossy().into_owned();

        let result = Config::load_from(env(&[("SENSORDASH_CONFIG", path.as_str())]));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_fail_load_when_file_sets_zero_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let result = Config::load_from(env(&[("SENSORDASH_CONFIG", path.as_str())]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
