// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading the configuration
//! and the sitemap it points to.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::services::SitemapIndex;

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load(path).or_else(|e| {
        log::warn!("Failed to load config from {path:?}: {e}");
        log::warn!("Using default configuration.");
        Ok(Config::default())
    })
}

/// Load the sitemap named by the configuration.
///
/// With no sitemap configured every path reports as absent.
pub fn load_sitemap(config: &Config) -> Result<SitemapIndex> {
    match &config.sitemap.path {
        Some(path) => SitemapIndex::load(path),
        None => {
            log::info!("No sitemap configured; pages will be marked as not in sitemap.");
            Ok(SitemapIndex::default())
        }
    }
}

/// Load and validate the configuration, then its sitemap.
///
/// A configuration file that is missing or malformed is an error.
pub fn load_all(config_path: &Path) -> Result<(Config, SitemapIndex)> {
    with_sitemap(Config::load(config_path)?)
}

/// Like [`load_all`], but a configuration file that cannot be read or
/// parsed falls back to defaults.
pub fn load_all_or_default(config_path: &Path) -> Result<(Config, SitemapIndex)> {
    with_sitemap(load_config(config_path)?)
}

fn with_sitemap(config: Config) -> Result<(Config, SitemapIndex)> {
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;

    let sitemap = load_sitemap(&config)?;
    Ok((config, sitemap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.crawler.host, Config::default().crawler.host);
    }

    #[test]
    fn test_load_all_with_sitemap() {
        let dir = TempDir::new().unwrap();
        let sitemap_path = dir.path().join("sitemap.xml");
        fs::write(
            &sitemap_path,
            "<urlset><url><loc>https://example.com/a/</loc></url></urlset>",
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!(
                "[crawler]\nhost = \"example.com\"\n\n[sitemap]\npath = {:?}\n",
                sitemap_path.to_string_lossy()
            ),
        )
        .unwrap();

        let (config, sitemap) = load_all(&config_path).unwrap();
        assert_eq!(config.crawler.host, "example.com");
        assert_eq!(sitemap.len(), 1);
    }

    #[test]
    fn test_load_all_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[crawler]\nhost = \"\"\n").unwrap();
        assert!(matches!(load_all(&config_path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_all_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[crawler]\nhost = 42\n").unwrap();
        assert!(matches!(load_all(&config_path), Err(AppError::Toml(_))));

        let (config, _) = load_all_or_default(&config_path).unwrap();
        assert_eq!(config.crawler.host, Config::default().crawler.host);
    }

    #[test]
    fn test_load_all_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("missing.toml");
        assert!(matches!(load_all(&config_path), Err(AppError::Io(_))));
        assert!(load_all_or_default(&config_path).is_ok());
    }

    #[test]
    fn test_load_all_or_default_still_validates() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[crawler]\nhost = \"example.com/path\"\n").unwrap();
        assert!(matches!(
            load_all_or_default(&config_path),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_missing_sitemap_file_is_error() {
        let mut config = Config::default();
        config.sitemap.path = Some("/nonexistent/sitemap.xml".into());
        assert!(matches!(load_sitemap(&config), Err(AppError::Io(_))));
    }
}
