use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::header::HeaderPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format (human, json)
    pub format: Option<String>,

    /// Legal-notice phrase required near the top of every file
    pub header_phrase: Option<String>,

    /// Top-level directories to scan, relative to the project root
    pub top_level_dirs: Option<Vec<String>>,

    /// Glob patterns selecting which files to check
    pub glob_patterns: Option<Vec<String>>,
}

impl Config {
    /// Merge configured overrides onto the built-in scan defaults.
    pub fn policy(&self) -> HeaderPolicy {
        let defaults = HeaderPolicy::default();
        HeaderPolicy {
            header_phrase: self
                .header_phrase
                .clone()
                .unwrap_or(defaults.header_phrase),
            top_level_dirs: self
                .top_level_dirs
                .clone()
                .unwrap_or(defaults.top_level_dirs),
            glob_patterns: self
                .glob_patterns
                .clone()
                .unwrap_or(defaults.glob_patterns),
        }
    }
}

/// Load configuration from pyproject.toml in the current directory
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&current_dir)
}

/// Load configuration from pyproject.toml in the given directory
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let pyproject_path = dir.join("pyproject.toml");

    if !pyproject_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&pyproject_path)
        .with_context(|| format!("Failed to read pyproject.toml: {}", pyproject_path.display()))?;

    let pyproject: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse pyproject.toml: {}", pyproject_path.display()))?;

    // Extract [tool.py-header-auditor] section
    if let Some(tool) = pyproject.get("tool") {
        if let Some(section) = tool.get("py-header-auditor") {
            let config: Config = section
                .clone()
                .try_into()
                .context("Failed to parse [tool.py-header-auditor] section")?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}
