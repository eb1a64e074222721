use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub architect: ArchitectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Main model, used by the architect itself
    pub model: String,

    /// Model the editor agent runs with; falls back to `model` when unset
    #[serde(default)]
    pub editor_model: Option<String>,

    /// Edit format the editor agent applies changes with
    #[serde(default = "default_editor_edit_format")]
    pub editor_edit_format: String,

    pub api_key: Option<String>,

    /// Base URL for API (optional, for custom endpoints)
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_editor_edit_format() -> String {
    "diff".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Enable automatic git commits after editor runs
    #[serde(default = "default_true")]
    pub auto_commit: bool,
}

fn default_true() -> bool {
    true
}

/// Behavior of the architect round itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitectConfig {
    /// Hand instructions to the editor without asking for confirmation
    #[serde(default)]
    pub auto_accept: bool,

    /// Plan-only mode: report deletions without touching the working tree
    #[serde(default)]
    pub dry_run: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("plan-coder").join("config.toml"))
    }

    /// Model the editor agent should run with: the configured editor model if
    /// set, otherwise the main model.
    pub fn editor_model(&self) -> &str {
        self.llm
            .editor_model
            .as_deref()
            .unwrap_or(&self.llm.model)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: "claude-sonnet-4-20250514".to_string(),
                editor_model: None,
                editor_edit_format: default_editor_edit_format(),
                api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
                base_url: None,
            },
            git: GitConfig::default(),
            architect: ArchitectConfig::default(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self { auto_commit: true }
    }
}
