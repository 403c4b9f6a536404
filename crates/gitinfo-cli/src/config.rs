use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Settings read from the optional `--config` TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Log at debug level even without `--verbose`.
    pub verbose: bool,
}

impl CliConfig {
    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(!c.verbose);
    }

    #[test]
    fn no_path_yields_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gitinfo.toml");
        std::fs::write(&path, "format = \"json\"\nverbose = true\n").unwrap();
        let c = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert!(c.verbose);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gitinfo.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();
        let c = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn unknown_format_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gitinfo.toml");
        std::fs::write(&path, "format = \"yaml\"\n").unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
