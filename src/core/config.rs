//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lista/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The delete confirmation delay is not configurable.
//!
//! Loading and resolving happen before the logger is installed (the log
//! level and file are config values themselves), so anything worth
//! logging along the way is collected in a `StartupLog` and replayed by
//! `main` once logging is up.

use clap::ValueEnum;
use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::filter::Filter;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_filter: Option<Filter>,
    pub undo_window_secs: Option<u64>,
    pub seed_items: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_UNDO_WINDOW_SECS: u64 = 4;
pub const DEFAULT_SEED_ITEMS: [&str; 3] = ["Leche", "Pan", "Huevos"];
pub const DEFAULT_LOG_FILE: &str = "lista.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub filter: Filter,
    pub undo_window: Duration,
    pub seed_items: Vec<String>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Overrides taken from the command line (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub filter: Option<Filter>,
    pub empty: bool,
}

// ============================================================================
// Startup Log
// ============================================================================

/// Log records produced before the logger exists.
#[derive(Debug, Default)]
pub struct StartupLog {
    records: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(level, _)| *level <= Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Send every record to the installed logger, oldest first.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lista/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lista").join("config.toml"))
}

/// Load config from `~/.lista/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ListaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(log: &mut StartupLog) -> Result<ListaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            log.push(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            return Ok(ListaConfig::default());
        }
    };

    if !path.exists() {
        log.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, log);
        return Ok(ListaConfig::default());
    }

    let config = load_config_from(&path)?;
    log.push(Level::Info, format!("Loaded config from {}", path.display()));
    log.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<ListaConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path, log: &mut StartupLog) {
    let default_content = r#"# Lista Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_filter = "all"             # "all", "pending" or "purchased" (env: LISTA_FILTER)
# undo_window_secs = 4               # How long the undo notice stays up (env: LISTA_UNDO_SECS)
# seed_items = ["Leche", "Pan", "Huevos"]

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace" (env: LISTA_LOG_LEVEL)
# file = "lista.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            log.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        log.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ListaConfig, cli: &CliOverrides, log: &mut StartupLog) -> ResolvedConfig {
    // Filter: CLI → env → config → default
    let filter = cli
        .filter
        .or_else(|| env_parse("LISTA_FILTER", |s| Filter::from_str(s, true).ok(), log))
        .or(config.general.default_filter)
        .unwrap_or_default();

    // Undo window: env → config → default
    let undo_secs = env_parse("LISTA_UNDO_SECS", |s| s.parse::<u64>().ok(), log)
        .or(config.general.undo_window_secs)
        .unwrap_or(DEFAULT_UNDO_WINDOW_SECS);

    // Seed: --empty wins, then config, then the built-in three
    let seed_items = if cli.empty {
        Vec::new()
    } else {
        config
            .general
            .seed_items
            .clone()
            .unwrap_or_else(|| DEFAULT_SEED_ITEMS.iter().map(|s| s.to_string()).collect())
    };

    // Log level: env → config → default
    let log_level = std::env::var("LISTA_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|s| parse_level(&s, log))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = PathBuf::from(
        config
            .logging
            .file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
    );

    ResolvedConfig {
        filter,
        undo_window: Duration::from_secs(undo_secs),
        seed_items,
        log_level,
        log_file,
    }
}

fn env_parse<T>(
    key: &str,
    parse: impl FnOnce(&str) -> Option<T>,
    log: &mut StartupLog,
) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        log.push(Level::Warn, format!("Ignoring invalid {key}={raw:?}"));
    }
    parsed
}

fn parse_level(raw: &str, log: &mut StartupLog) -> Option<LevelFilter> {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            log.push(Level::Warn, format!("Ignoring unknown log level {raw:?}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ListaConfig::default();
        assert!(config.general.default_filter.is_none());
        assert!(config.general.seed_items.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ListaConfig::default();
        let resolved = resolve(&config, &CliOverrides::default(), &mut StartupLog::new());
        assert_eq!(resolved.filter, Filter::All);
        assert_eq!(resolved.undo_window, Duration::from_secs(DEFAULT_UNDO_WINDOW_SECS));
        assert_eq!(resolved.seed_items, ["Leche", "Pan", "Huevos"]);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from("lista.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ListaConfig {
            general: GeneralConfig {
                default_filter: Some(Filter::Pending),
                undo_window_secs: Some(10),
                seed_items: Some(vec!["Arroz".to_string()]),
            },
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: Some("/tmp/lista-test.log".to_string()),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default(), &mut StartupLog::new());
        assert_eq!(resolved.filter, Filter::Pending);
        assert_eq!(resolved.undo_window, Duration::from_secs(10));
        assert_eq!(resolved.seed_items, ["Arroz"]);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/lista-test.log"));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ListaConfig {
            general: GeneralConfig {
                default_filter: Some(Filter::Pending),
                seed_items: Some(vec!["Arroz".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            filter: Some(Filter::Purchased),
            empty: true,
        };
        let resolved = resolve(&config, &cli, &mut StartupLog::new());
        assert_eq!(resolved.filter, Filter::Purchased);
        assert!(resolved.seed_items.is_empty());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = ListaConfig {
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let mut log = StartupLog::new();
        let resolved = resolve(&config, &CliOverrides::default(), &mut log);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);

        // Kept for replay once the logger is installed
        let warnings: Vec<&str> = log.warnings().collect();
        assert_eq!(warnings, ["Ignoring unknown log level \"chatty\""]);
    }

    #[test]
    fn test_startup_log_keeps_order_and_levels() {
        let mut log = StartupLog::new();
        log.push(Level::Info, "generating default");
        log.push(Level::Warn, "first");
        log.push(Level::Debug, "details");
        log.push(Level::Error, "second");

        let warnings: Vec<&str> = log.warnings().collect();
        assert_eq!(warnings, ["first", "second"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_filter = "purchased"
undo_window_secs = 6
seed_items = ["Leche", "Pan"]

[logging]
level = "info"
file = "shopping.log"
"#;
        let config: ListaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_filter, Some(Filter::Purchased));
        assert_eq!(config.general.undo_window_secs, Some(6));
        assert_eq!(
            config.general.seed_items.as_deref(),
            Some(&["Leche".to_string(), "Pan".to_string()][..])
        );
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(config.logging.file.as_deref(), Some("shopping.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
undo_window_secs = 2
"#;
        let config: ListaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.undo_window_secs, Some(2));
        assert!(config.general.default_filter.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("lista-bad-{}.toml", std::process::id()));
        fs::write(&path, "[general\nundo_window_secs = ").unwrap();

        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("lista-definitely-missing.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
