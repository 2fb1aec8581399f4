//! CLI settings layered from defaults, a TOML file and `REPUTE_*` environment variables.
//!
//! Precedence, lowest first: built-in defaults, the settings file, the
//! environment, then command-line flags (applied by the caller). Nested keys
//! use `__` in environment names, e.g. `REPUTE_RENDER__TITLE`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use repute_core::constants::{DEFAULT_INPUT_FILE, DEFAULT_PRECISION, MAX_ROUNDING_DIGITS};
use repute_viz::RenderConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "REPUTE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reputation file read by `analyze` when no path is given.
    pub input: PathBuf,
    /// Decimal digits kept in the coefficients.
    pub precision: u32,
    /// Log level filter string (e.g. "info", "debug", "repute_metrics=trace").
    pub log_level: String,
    /// Log output format ("text" or "json").
    pub log_format: String,
    pub render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            precision: DEFAULT_PRECISION,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; otherwise the per-user
    /// file under the platform config directory is used if present. Files are
    /// always parsed as TOML whatever their extension.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(default_path) = default_settings_path() {
                    builder = builder.add_source(
                        File::from(default_path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .context("failed to load settings")
    }

    /// Reject values the engine or renderer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_ROUNDING_DIGITS {
            bail!(
                "precision {} exceeds maximum of {MAX_ROUNDING_DIGITS} digits",
                self.precision
            );
        }
        if self.log_format != "text" && self.log_format != "json" {
            bail!("log_format must be \"text\" or \"json\", got {:?}", self.log_format);
        }
        self.render.validate().context("invalid render settings")?;
        Ok(())
    }
}

/// `<config dir>/repute/config.toml`, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("repute").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file_with_suffix(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        settings_file_with_suffix(contents, ".toml")
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.input, PathBuf::from("reps.txt"));
        assert_eq!(s.precision, 3);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.log_format, "text");
        s.validate().unwrap();
    }

    #[test]
    fn loads_toml_file() {
        let file = settings_file(
            r##"
input = "data/dao.txt"
precision = 5

[render]
title = "My DAO"
width = 900

[render.theme]
lorenz = "#112233"
"##,
        );
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.input, PathBuf::from("data/dao.txt"));
        assert_eq!(s.precision, 5);
        assert_eq!(s.render.title, "My DAO");
        assert_eq!(s.render.width, 900);
        assert_eq!(s.render.height, 600);
        assert_eq!(s.render.theme.lorenz, "#112233");
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn loads_toml_regardless_of_extension() {
        for suffix in [".conf", ""] {
            let file = settings_file_with_suffix("precision = 7\n", suffix);
            let s = Settings::load(Some(file.path())).unwrap();
            assert_eq!(s.precision, 7, "suffix {suffix:?}");
        }
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn rejects_excessive_precision() {
        let s = Settings {
            precision: MAX_ROUNDING_DIGITS + 1,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let s = Settings {
            log_format: "xml".to_string(),
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_invalid_render() {
        let mut s = Settings::default();
        s.render.width = 1;
        assert!(s.validate().is_err());
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with("repute/config.toml"), "{path:?}");
        }
    }
}
