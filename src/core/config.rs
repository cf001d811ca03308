//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tbdui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The store credentials are not part of the file. They must come from the
//! environment (optionally seeded from `.env`), see [`StartupParams`].

use log::{debug, info, warn};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TbduiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub debug_log: Option<bool>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub border_color: Option<String>,
    pub selected_color: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub collection: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BORDER_COLOR: Color = Color::Green;
pub const DEFAULT_SELECTED_COLOR: Color = Color::Cyan;
pub const DEFAULT_STORE_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_COLLECTION: &str = "integrations";
pub const DEFAULT_LOG_FILE: &str = "tbdui.log";

/// Environment variables that must be present before the UI starts.
pub const REQUIRED_ENV: [&str; 4] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_REGION",
    "ENVIRONMENT",
];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Border colors for unfocused and focused components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
    pub selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER_COLOR,
            selected: DEFAULT_SELECTED_COLOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub store_endpoint: String,
    pub collection: String,
    pub debug_log: bool,
    pub log_file: String,
}

/// Connection parameters consumed by the store client.
#[derive(Clone)]
pub struct StartupParams {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub environment: String,
}

impl fmt::Debug for StartupParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartupParams")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("environment", &self.environment)
            .finish()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// A required environment variable is not set.
    MissingEnv(&'static str),
    /// A theme color could not be parsed.
    InvalidColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingEnv(name) => write!(f, "{name} env var is required"),
            ConfigError::InvalidColor(value) => write!(f, "invalid color: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tbdui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tbdui").join("config.toml"))
}

/// Load config from `~/.tbdui/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TbduiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TbduiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TbduiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TbduiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TbduiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Written on first run. Every line is commented out, so it parses to the defaults.
const DEFAULT_CONFIG: &str = r##"# tbdui Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
#
# Store credentials are never read from this file. Set AWS_ACCESS_KEY_ID,
# AWS_SECRET_ACCESS_KEY, AWS_REGION and ENVIRONMENT (or put them in .env).

# [general]
# debug_log = true                   # log every key press to the UI log
# log_file = "tbdui.log"             # or TBDUI_LOG_FILE / --log-file

# [theme]
# border_color = "green"             # any ratatui color name or "#rrggbb"
# selected_color = "cyan"

# [store]
# endpoint = "http://localhost:8000" # or TBDUI_STORE_ENDPOINT
# collection = "integrations"        # or TBDUI_COLLECTION; prefixed with ENVIRONMENT
"##;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// CLI overrides. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub collection: Option<String>,
    pub no_debug_log: bool,
    pub log_file: Option<String>,
}

/// Resolve the final config from the process environment.
pub fn resolve(config: &TbduiConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, cli, |name| std::env::var(name).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `env` looks up an environment variable by name.
pub fn resolve_with(
    config: &TbduiConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let theme = Theme {
        border: parse_color(config.theme.border_color.as_deref(), DEFAULT_BORDER_COLOR)?,
        selected: parse_color(config.theme.selected_color.as_deref(), DEFAULT_SELECTED_COLOR)?,
    };

    // Endpoint: CLI → env → config → default
    let store_endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("TBDUI_STORE_ENDPOINT"))
        .or_else(|| config.store.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_STORE_ENDPOINT.to_string());

    // Collection: CLI → env → config → default
    let collection = cli
        .collection
        .clone()
        .or_else(|| env("TBDUI_COLLECTION"))
        .or_else(|| config.store.collection.clone())
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    let debug_log = !cli.no_debug_log && config.general.debug_log.unwrap_or(true);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TBDUI_LOG_FILE"))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Ok(ResolvedConfig {
        theme,
        store_endpoint,
        collection,
        debug_log,
        log_file,
    })
}

fn parse_color(value: Option<&str>, default: Color) -> Result<Color, ConfigError> {
    match value {
        None => Ok(default),
        Some(s) => Color::from_str(s).map_err(|_| ConfigError::InvalidColor(s.to_string())),
    }
}

impl StartupParams {
    /// Read the required connection parameters from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the required connection parameters, failing on the first missing one.
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let [key, secret, region, environment] = REQUIRED_ENV;
        let required = |name: &'static str| env(name).ok_or(ConfigError::MissingEnv(name));
        Ok(Self {
            access_key_id: required(key)?,
            secret_access_key: required(secret)?,
            region: required(region)?,
            environment: required(environment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = TbduiConfig::default();
        assert!(config.store.endpoint.is_none());
        assert!(config.theme.border_color.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&TbduiConfig::default(), &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.theme, Theme::default());
        assert_eq!(resolved.store_endpoint, DEFAULT_STORE_ENDPOINT);
        assert_eq!(resolved.collection, DEFAULT_COLLECTION);
        assert!(resolved.debug_log);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let config: TbduiConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.general.debug_log.is_none());
        assert!(config.general.log_file.is_none());
        assert!(config.theme.border_color.is_none());
        assert!(config.store.endpoint.is_none());
        assert!(DEFAULT_CONFIG.contains(r##""#rrggbb""##));
    }

    #[test]
    fn test_log_file_hierarchy() {
        let config: TbduiConfig = toml::from_str(
            r#"
[general]
log_file = "/tmp/from-file.log"
"#,
        )
        .unwrap();
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.log_file, "/tmp/from-file.log");

        let env = |name: &str| (name == "TBDUI_LOG_FILE").then(|| "/tmp/from-env.log".to_string());
        let resolved = resolve_with(&config, &CliOverrides::default(), env).unwrap();
        assert_eq!(resolved.log_file, "/tmp/from-env.log");

        let cli = CliOverrides {
            log_file: Some("/tmp/from-cli.log".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with(&config, &cli, env).unwrap();
        assert_eq!(resolved.log_file, "/tmp/from-cli.log");
    }

    #[test]
    fn test_override_hierarchy() {
        let config = TbduiConfig {
            store: StoreConfig {
                endpoint: Some("http://from-file".to_string()),
                collection: Some("file-coll".to_string()),
            },
            ..Default::default()
        };
        let env = |name: &str| match name {
            "TBDUI_STORE_ENDPOINT" => Some("http://from-env".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            collection: Some("cli-coll".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with(&config, &cli, env).unwrap();
        assert_eq!(resolved.store_endpoint, "http://from-env");
        assert_eq!(resolved.collection, "cli-coll");
    }

    #[test]
    fn test_cli_disables_debug_log() {
        let cli = CliOverrides {
            no_debug_log: true,
            ..Default::default()
        };
        let resolved = resolve_with(&TbduiConfig::default(), &cli, no_env).unwrap();
        assert!(!resolved.debug_log);
    }

    #[test]
    fn test_theme_colors_from_toml() {
        let toml_str = r##"
[theme]
border_color = "white"
selected_color = "#00ff00"

[general]
debug_log = false
"##;
        let config: TbduiConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.theme.border, Color::White);
        assert_eq!(resolved.theme.selected, Color::Rgb(0, 255, 0));
        assert!(!resolved.debug_log);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let config = TbduiConfig {
            theme: ThemeConfig {
                border_color: Some("not-a-color".to_string()),
                selected_color: None,
            },
            ..Default::default()
        };
        let err = resolve_with(&config, &CliOverrides::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref v) if v == "not-a-color"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[store]
collection = "tables"
"#;
        let config: TbduiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.collection.as_deref(), Some("tables"));
        assert!(config.store.endpoint.is_none());
        assert!(config.general.debug_log.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_startup_params_all_present() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_REGION", "us-east-1"),
            ("ENVIRONMENT", "staging"),
        ]);
        let params = StartupParams::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(params.region, "us-east-1");
        assert_eq!(params.environment, "staging");
        assert!(!format!("{params:?}").contains("secret\""));
    }

    #[test]
    fn test_startup_params_reports_first_missing() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("AWS_ACCESS_KEY_ID", "AKID"), ("AWS_SECRET_ACCESS_KEY", "secret")]);
        let err = StartupParams::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert_eq!(err.to_string(), "AWS_REGION env var is required");
    }
}
