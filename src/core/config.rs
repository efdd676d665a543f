//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Default batch sizes, matching what the import screens are usually
/// smoke-tested with
pub const DEFAULT_MEDICAL_DEVICES: usize = 100;
pub const DEFAULT_DIAGNOSTIC_DEVICES: usize = 100;
pub const DEFAULT_ACCESSORIES: usize = 200;
pub const DEFAULT_SPARE_PARTS: usize = 300;

/// Stock location label as it exists in the target database
pub const DEFAULT_STOCK_LOCATION: &str = "bureau pricipale";

pub const DEFAULT_OUT_DIR: &str = "fixtures";

/// stockgen configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the fixture files are written to
    pub out_dir: Option<PathBuf>,

    /// Stock location label stamped on every record
    pub stock_location: Option<String>,

    /// Default record counts per category
    pub medical_devices: Option<usize>,
    pub diagnostic_devices: Option<usize>,
    pub accessories: Option<usize>,
    pub spare_parts: Option<usize>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/stockgen/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(dir) = std::env::var("STOCKGEN_OUT_DIR") {
            config.out_dir = Some(PathBuf::from(dir));
        }
        if let Ok(location) = std::env::var("STOCKGEN_STOCK_LOCATION") {
            config.stock_location = Some(location);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "stockgen")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.out_dir.is_some() {
            self.out_dir = other.out_dir;
        }
        if other.stock_location.is_some() {
            self.stock_location = other.stock_location;
        }
        if other.medical_devices.is_some() {
            self.medical_devices = other.medical_devices;
        }
        if other.diagnostic_devices.is_some() {
            self.diagnostic_devices = other.diagnostic_devices;
        }
        if other.accessories.is_some() {
            self.accessories = other.accessories;
        }
        if other.spare_parts.is_some() {
            self.spare_parts = other.spare_parts;
        }
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn stock_location(&self) -> String {
        self.stock_location
            .clone()
            .unwrap_or_else(|| DEFAULT_STOCK_LOCATION.to_string())
    }

    pub fn medical_devices(&self) -> usize {
        self.medical_devices.unwrap_or(DEFAULT_MEDICAL_DEVICES)
    }

    pub fn diagnostic_devices(&self) -> usize {
        self.diagnostic_devices.unwrap_or(DEFAULT_DIAGNOSTIC_DEVICES)
    }

    pub fn accessories(&self) -> usize {
        self.accessories.unwrap_or(DEFAULT_ACCESSORIES)
    }

    pub fn spare_parts(&self) -> usize {
        self.spare_parts.unwrap_or(DEFAULT_SPARE_PARTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.out_dir(), PathBuf::from("fixtures"));
        assert_eq!(config.stock_location(), DEFAULT_STOCK_LOCATION);
        assert_eq!(config.medical_devices(), 100);
        assert_eq!(config.diagnostic_devices(), 100);
        assert_eq!(config.accessories(), 200);
        assert_eq!(config.spare_parts(), 300);
    }

    #[test]
    fn test_merge_takes_other_when_set() {
        let mut base = Config::default();
        let other = Config {
            stock_location: Some("entrepôt nord".to_string()),
            accessories: Some(50),
            ..Config::default()
        };
        base.merge(other);
        assert_eq!(base.stock_location(), "entrepôt nord");
        assert_eq!(base.accessories(), 50);
        // untouched fields keep defaults
        assert_eq!(base.medical_devices(), 100);
    }

    #[test]
    fn test_merge_keeps_base_when_other_unset() {
        let mut base = Config {
            out_dir: Some(PathBuf::from("/tmp/out")),
            ..Config::default()
        };
        base.merge(Config::default());
        assert_eq!(base.out_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "out_dir: /data/fixtures\nspare_parts: 12\n";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.out_dir(), PathBuf::from("/data/fixtures"));
        assert_eq!(config.spare_parts(), 12);
        assert!(config.stock_location.is_none());
    }
}
