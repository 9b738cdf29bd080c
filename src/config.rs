use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub tracking: TrackingSettings,
    #[serde(default)]
    pub frontend: FrontendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Tracking aggregator connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String { "https://api.trackmage.com".to_string() }
fn default_timeout_ms() -> u64 { 3000 }

/// Carrier fallback and response labelling
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingSettings {
    #[serde(default = "default_carriers")]
    pub carriers: Vec<String>,
    #[serde(default = "default_carrier_label")]
    pub carrier_label: String,
    #[serde(default = "default_true")]
    pub strict_validation: bool,
    #[serde(default = "default_status")]
    pub default_status: String,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            carriers: default_carriers(),
            carrier_label: default_carrier_label(),
            strict_validation: true,
            default_status: default_status(),
        }
    }
}

fn default_carriers() -> Vec<String> {
    ["pos-malaysia", "poslaju", "my-post", "malaysia-post"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_carrier_label() -> String { "Pos Malaysia".to_string() }
fn default_status() -> String { "Dalam proses".to_string() }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendSettings {
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self { index_file: default_index_file() }
    }
}

fn default_index_file() -> String { "static/index.html".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with PARCEL__)
    /// 4. `TRACKMAGE_API_KEY` and `PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PARCEL__UPSTREAM__TIMEOUT_MS -> upstream.timeout_ms
            .add_source(environment())
            .build()?;

        apply_well_known_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PARCEL")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("tracking.carriers")
        .try_parsing(true)
}

/// Honour the unprefixed variables a plain deployment sets
fn apply_well_known_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("TRACKMAGE_API_KEY") {
        builder = builder.set_override("upstream.api_key", api_key)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracking() {
        let tracking = TrackingSettings::default();
        assert_eq!(
            tracking.carriers,
            vec!["pos-malaysia", "poslaju", "my-post", "malaysia-post"]
        );
        assert_eq!(tracking.carrier_label, "Pos Malaysia");
        assert!(tracking.strict_validation);
    }

    #[test]
    fn test_default_upstream() {
        let upstream = UpstreamSettings::default();
        assert_eq!(upstream.base_url, "https://api.trackmage.com");
        assert_eq!(upstream.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_shipped_default_file() {
        let settings = Settings::load_from("config/default.toml").unwrap();
        assert_eq!(settings.tracking.carriers, default_carriers());
        assert_eq!(settings.upstream.timeout_ms, 3000);
        assert_eq!(settings.frontend.index_file, "static/index.html");
    }

    #[test]
    fn test_load_from_custom_file() {
        let path = std::env::temp_dir().join(format!("parcel-track-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[upstream]\ntimeout_ms = 1200\n\n[tracking]\ncarriers = [\"poslaju\"]\nstrict_validation = false\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.upstream.timeout(), Duration::from_millis(1200));
        assert_eq!(settings.tracking.carriers, vec!["poslaju"]);
        assert!(!settings.tracking.strict_validation);
        assert_eq!(settings.tracking.carrier_label, "Pos Malaysia");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_empty_sections_fall_back_to_defaults() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.tracking.carriers.len(), 4);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }
}
