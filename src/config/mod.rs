pub mod defaults;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};

/// Site metadata, optionally loaded from a TOML file:
///
/// ```toml
/// [site]
/// base_url = "https://vantage-cto.com"
/// root_lastmod = "2026-02-19"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
    #[serde(default = "defaults::root_lastmod")]
    pub root_lastmod: String,
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            root_lastmod: defaults::root_lastmod(),
            user_agent: defaults::user_agent(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BlogError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let config: SiteConfig =
            toml::from_str(&contents).map_err(|e| BlogError::ConfigInvalid {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.site.base_url.trim().is_empty() {
            return Err(BlogError::ConfigInvalid {
                message: "site.base_url must not be empty".into(),
            });
        }
        NaiveDate::parse_from_str(&self.site.root_lastmod, "%Y-%m-%d").map_err(|e| {
            BlogError::ConfigInvalid {
                message: format!(
                    "site.root_lastmod must be YYYY-MM-DD, got {:?}: {e}",
                    self.site.root_lastmod
                ),
            }
        })?;
        Ok(())
    }

    pub fn user_agent(&self) -> &str {
        &self.site.user_agent
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub api_url: String,
    pub slug: String,
    pub output_dir: PathBuf,
    pub site: SiteConfig,
}

impl RunConfig {
    pub fn new(api_url: &str, slug: &str, output_dir: impl Into<PathBuf>, site: SiteConfig) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            slug: slug.to_string(),
            output_dir: output_dir.into(),
            site,
        }
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.output_dir.join("blog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), "https://vantage-cto.com");
        assert_eq!(config.site.root_lastmod, "2026-02-19");
        assert!(config.site.user_agent.starts_with("vantage-blog/"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.toml");
        fs::write(&path, "[site]\nbase_url = \"https://staging.example.com/\"\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.base_url(), "https://staging.example.com");
        assert_eq!(config.site.root_lastmod, "2026-02-19");
    }

    #[test]
    fn test_load_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.toml");
        fs::write(&path, "").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.base_url(), "https://vantage-cto.com");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/blog.toml")).unwrap_err();
        assert!(matches!(err, BlogError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_rejects_bad_lastmod() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.toml");
        fs::write(&path, "[site]\nroot_lastmod = \"Feb 19\"\n").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, BlogError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.toml");
        fs::write(&path, "[site\nbase_url = 1").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, BlogError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = SiteConfig::load_or_default(None).unwrap();
        assert_eq!(config.site.root_lastmod, defaults::root_lastmod());
    }

    #[test]
    fn test_run_config_trims_api_url() {
        let run = RunConfig::new("http://api.local/", "hello", "out", SiteConfig::default());
        assert_eq!(run.api_url, "http://api.local");
        assert_eq!(run.blog_dir(), PathBuf::from("out").join("blog"));
    }
}
