//! TOML configuration for chunking and retrieval tuning.
//!
//! Every field has a default, so an empty file (or no `[chunking]` /
//! `[retrieval]` table at all) yields the conventional settings: 500-char
//! chunks, 10 search results.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct KbConfig {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    /// Chunk size target in characters.
    #[serde(default = "default_target_size")]
    pub target_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            target_size: default_target_size(),
        }
    }
}

fn default_target_size() -> usize {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Maximum number of search results returned.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

pub fn load_config(path: &Path) -> Result<KbConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: KbConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.chunking.target_size == 0 {
        anyhow::bail!("chunking.target_size must be > 0");
    }

    if config.retrieval.limit == 0 {
        anyhow::bail!("retrieval.limit must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("kb.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_from_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");
        let config = load_config(&path).unwrap();
        assert_eq!(config.chunking.target_size, 500);
        assert_eq!(config.retrieval.limit, 10);
    }

    #[test]
    fn test_explicit_values() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "[chunking]\ntarget_size = 800\n\n[retrieval]\nlimit = 25\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.chunking.target_size, 800);
        assert_eq!(config.retrieval.limit, 25);
    }

    #[test]
    fn test_zero_target_size_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[chunking]\ntarget_size = 0\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[retrieval]\nlimit = 0\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_file_errors_with_path() {
        let err = load_config(Path::new("/nonexistent/kb.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kb.toml"));
    }
}
