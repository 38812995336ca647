use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit --data-dir value (with tilde expansion)
/// 2. TEAMFIT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.teamfit (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: TEAMFIT_PATH environment variable
    if let Ok(env_path) = std::env::var("TEAMFIT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("teamfit"));
    }

    // Priority 4: Fallback to ~/.teamfit (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".teamfit"));
    }

    bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Analytics backend serving dashboard data and interview endpoints.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Public base URL interview join links are built from when resuming a
    /// historical session.
    #[serde(default = "default_interview_base_url")]
    pub interview_base_url: String,
}

fn default_api_url() -> String {
    "http://localhost:5005".to_string()
}

fn default_interview_base_url() -> String {
    "https://agent.ai-interviewer.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            interview_base_url: default_interview_base_url(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:5005");
        assert_eq!(config.interview_base_url, "https://agent.ai-interviewer.com");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_url: "http://analytics.internal:8080".to_string(),
            interview_base_url: "https://interviews.example.com".to_string(),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api_url, "http://analytics.internal:8080");
        assert_eq!(loaded.interview_base_url, "https://interviews.example.com");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_url, "http://localhost:5005");

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_missing_fields() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "api_url = \"http://other:9000\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_url, "http://other:9000");
        assert_eq!(config.interview_base_url, "https://agent.ai-interviewer.com");

        Ok(())
    }

    #[test]
    fn test_resolve_data_dir_explicit_wins() -> Result<()> {
        let resolved = resolve_data_dir(Some("/tmp/teamfit-test"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/teamfit-test"));
        Ok(())
    }

    #[test]
    fn test_resolve_data_dir_expands_tilde() -> Result<()> {
        let resolved = resolve_data_dir(Some("~/teamfit-data"))?;
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(resolved, PathBuf::from(home).join("teamfit-data"));
        } else {
            assert_eq!(resolved, PathBuf::from("~/teamfit-data"));
        }
        Ok(())
    }
}
