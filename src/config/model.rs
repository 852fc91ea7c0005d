//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dimensions of the grid store. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_size")]
    pub rows: usize,
    #[serde(default = "default_grid_size")]
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_grid_size(),
            columns: default_grid_size(),
        }
    }
}

/// How much of the grid is shown and how the controls behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Initial number of visible rows.
    #[serde(default = "default_view_size")]
    pub rows: usize,
    /// Initial number of visible columns.
    #[serde(default = "default_view_size")]
    pub columns: usize,
    /// Quiet period before a rows/columns change is applied.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            rows: default_view_size(),
            columns: default_view_size(),
            debounce_ms: default_debounce_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_grid_size() -> usize {
    100
}

fn default_view_size() -> usize {
    50
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_tick_ms() -> u64 {
    50
}

fn default_log_dir() -> String {
    "~/.local/share/memogrid/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.grid.rows, 100);
        assert_eq!(cfg.grid.columns, 100);
        assert_eq!(cfg.view.rows, 50);
        assert_eq!(cfg.view.debounce_ms, 300);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [grid]
            rows = 10

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid.rows, 10);
        assert_eq!(cfg.grid.columns, 100);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.log_dir, "~/.local/share/memogrid/logs");
    }
}
