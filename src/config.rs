use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  /// Custom title for the header (defaults to the server host if not set)
  pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Base URL of the task service, e.g. `http://localhost:4000/api`
  pub url: String,
  /// Seconds between connectivity probes
  #[serde(default = "default_probe_interval")]
  pub probe_interval_secs: u64,
}

fn default_probe_interval() -> u64 {
  15
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./taskdeck.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/taskdeck/config.yaml
  /// 4. ~/.config/taskdeck/config.yaml
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => Err(eyre!(
        "No configuration file found. Create one at ~/.config/taskdeck/config.yaml\n\
                 with at least a server url:\n\
                 server:\n\
                 \x20 url: http://localhost:4000/api"
      )),
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("taskdeck.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("taskdeck").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_yaml::from_str(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_minimal_config() {
    let config: Config =
      serde_yaml::from_str("server:\n  url: http://localhost:4000/api\n").unwrap();
    assert_eq!(config.server.url, "http://localhost:4000/api");
    assert_eq!(config.server.probe_interval_secs, 15);
    assert_eq!(config.title, None);
  }

  #[test]
  fn test_parse_full_config() {
    let yaml =
      "server:\n  url: https://tasks.example.com/api\n  probe_interval_secs: 60\ntitle: My Tasks\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.server.probe_interval_secs, 60);
    assert_eq!(config.title.as_deref(), Some("My Tasks"));
  }
}
