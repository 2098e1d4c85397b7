//! Configuration file management

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tweetgraph_analysis::AnalysisConfig;

/// Load the analysis configuration.
///
/// An explicit `path` must exist. Without one, the platform config file is
/// used, and written with defaults on first run.
pub fn load(path: Option<&Path>) -> Result<(AnalysisConfig, PathBuf)> {
    match path {
        Some(path) => Ok((read(path)?, path.to_path_buf())),
        None => {
            let config_path = default_config_path();
            if config_path.exists() {
                Ok((read(&config_path)?, config_path))
            } else {
                let config = AnalysisConfig::default();
                save(&config, &config_path).context("Failed to save default config")?;
                Ok((config, config_path))
            }
        }
    }
}

fn read(path: &Path) -> Result<AnalysisConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&contents).context("Failed to parse config file")
}

/// Save configuration as TOML
pub fn save(config: &AnalysisConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path, contents).context("Failed to write config file")?;

    Ok(())
}

/// Platform config file location
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tweetgraph")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tweetgraph_analysis::StopWords;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AnalysisConfig {
            number_of_clusters: 4,
            stop_words: StopWords::None,
            seed: Some(12),
            ..Default::default()
        };

        save(&config, &path).unwrap();
        let (loaded, loaded_from) = load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded_from, path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "number_of_clusters = 6\nstop_words = \"english\"\n").unwrap();

        let (config, _) = load(Some(&path)).unwrap();
        assert_eq!(config.number_of_clusters, 6);
        assert_eq!(config.max_features, 2000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
