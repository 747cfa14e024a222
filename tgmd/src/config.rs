use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use tgmd_render::RenderConfig;

/// Configuration file contents for tgmd.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Heading wrappers and bullet glyphs for the renderer.
  #[serde(default)]
  pub render: RenderConfig,
}

impl Config {
  /// Load the configuration from `path`, or fall back to the defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let Some(path) = path else {
      debug!("No configuration file given, using defaults");
      return Ok(Self::default());
    };

    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read configuration file: {}", path.display())
    })?;
    let config: Self = toml::from_str(&content).wrap_err_with(|| {
      format!("Invalid configuration file: {}", path.display())
    })?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
  }

  /// Render the default configuration as a TOML document.
  pub fn default_toml() -> Result<String> {
    toml::to_string(&Self::default())
      .wrap_err("Failed to serialize default configuration")
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Fine in tests"
  )]
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn missing_path_uses_defaults() {
    assert_eq!(Config::load(None).unwrap(), Config::default());
  }

  #[test]
  fn default_toml_loads_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tgmd.toml");
    fs::write(&path, Config::default_toml().unwrap()).expect("write config");

    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
  }

  #[test]
  fn empty_file_uses_default_render_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tgmd.toml");
    fs::write(&path, "").expect("write config");

    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
  }

  #[test]
  fn invalid_render_config_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tgmd.toml");
    fs::write(&path, "[render]\nbullets = [\"a\"]\nheadings = []\n")
      .expect("write config");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{err:?}").contains("heading wrappers"));
  }

  #[test]
  fn unreadable_path_reports_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
  }
}
