use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub links: LinkConfig,
    /// Render home pages without writing them
    #[serde(skip)]
    pub dry_run: bool,
}

/// Tree discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root home file name, also excluded from listings at every depth
    pub home_file: String,
    /// Directory names skipped when they are direct children of the root
    pub excluded_root_folders: Vec<String>,
    /// File names skipped at every depth
    pub excluded_files: Vec<String>,
    pub markdown_suffix: String,
}

/// Link fragment settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Drop the markdown suffix from root-level links too
    pub strip_root_suffix: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            home_file: "Home.md".to_string(),
            excluded_root_folders: vec!["uploads".to_string(), "wikitoc".to_string()],
            excluded_files: vec![],
            markdown_suffix: ".md".to_string(),
        }
    }
}

impl ScanConfig {
    /// Whether a file name is excluded at every depth. The home file always is.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        name == self.home_file || self.excluded_files.iter().any(|f| f == name)
    }

    /// Whether a directory name is excluded at the given depth
    pub fn is_excluded_folder(&self, name: &str, depth: usize) -> bool {
        depth == 0 && self.excluded_root_folders.iter().any(|f| f == name)
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, home_file: Option<String>, exclude: Vec<String>, dry_run: bool) {
        if let Some(home) = home_file {
            self.scan.home_file = home;
        }

        if !exclude.is_empty() {
            self.scan.excluded_root_folders.extend(exclude);
        }

        if dry_run {
            self.dry_run = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let scan = &self.scan;

        if !scan.markdown_suffix.starts_with('.') || scan.markdown_suffix.len() < 2 {
            return Err(Error::config_validation(
                "markdown_suffix must start with '.' and name an extension",
            ));
        }

        if scan.home_file.is_empty() {
            return Err(Error::config_validation("home_file must not be empty"));
        }

        if scan.home_file.contains('/') || scan.home_file.contains('\\') {
            return Err(Error::config_validation(
                "home_file must be a file name, not a path",
            ));
        }

        if !scan.home_file.ends_with(&scan.markdown_suffix) {
            return Err(Error::config_validation(format!(
                "home_file must end with {}",
                scan.markdown_suffix
            )));
        }

        let names = scan.excluded_root_folders.iter().chain(&scan.excluded_files);
        for name in names {
            if name.is_empty() {
                return Err(Error::config_validation("excluded names must not be empty"));
            }
        }

        Ok(())
    }
}
