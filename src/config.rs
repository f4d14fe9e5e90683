use std::fs;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// File looked up in the working directory when no `--file` is given.
pub const DEFAULT_CONFIG_FILE: &str = "auth-scaffold.toml";
pub const DEFAULT_BASE_DIR: &str = "auth-service";

/// Settings read from `auth-scaffold.toml`.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

fn default_base_dir() -> String {
    DEFAULT_BASE_DIR.to_owned()
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

impl ScaffoldConfig {
    /// Resolve configuration: an explicit file must exist, the default file is
    /// optional, and neither present yields the built-in defaults.
    pub fn load(explicit: Option<&Utf8Path>, cwd: &Utf8Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("config file {} does not exist", path);
            }
            return Self::from_file(path);
        }

        let discovered = cwd.join(DEFAULT_CONFIG_FILE);
        if discovered.exists() {
            return Self::from_file(&discovered);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path))?;
        tracing::debug!(config = %path, base_dir = %config.base_dir, "loaded config");
        Ok(config)
    }

    pub fn base_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(&self.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::unique_temp_dir;

    #[test]
    fn defaults_when_no_file() {
        let root = unique_temp_dir();
        fs::create_dir_all(&root).unwrap();

        let config = ScaffoldConfig::load(None, &root).unwrap();
        assert_eq!(config.base_dir(), Utf8PathBuf::from("auth-service"));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn discovers_default_file() {
        let root = unique_temp_dir();
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(DEFAULT_CONFIG_FILE), "base_dir = 'services/auth'\n").unwrap();

        let config = ScaffoldConfig::load(None, &root).unwrap();
        assert_eq!(config.base_dir, "services/auth");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn explicit_file_must_exist() {
        let root = unique_temp_dir();
        let missing = root.join("nope.toml");

        let err = ScaffoldConfig::load(Some(&missing), &root).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let root = unique_temp_dir();
        fs::create_dir_all(&root).unwrap();
        let cfg = root.join("custom.toml");
        fs::write(&cfg, "base = 'x'\n").unwrap();

        assert!(ScaffoldConfig::load(Some(&cfg), &root).is_err());

        let _ = fs::remove_dir_all(&root);
    }
}
