//! Configuration file support for ferro-annotate.
//!
//! # Example Configuration
//!
//! ```toml
//! translation = "placeholder"
//! coding_biotypes = ["protein_coding", "nonsense_mediated_decay"]
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-annotate.toml` in current directory
//! 2. `~/.config/ferro/annotate.toml`
//!
//! An explicit `--config` path on the command line skips the search.

use crate::effect::TranslationMode;
use crate::error::FerroError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed annotator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorConfig {
    /// How substitution descriptors are produced.
    pub translation: TranslationMode,
    /// Replaces the built-in coding biotype set when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding_biotypes: Option<Vec<String>>,
}

impl AnnotatorConfig {
    /// Load configuration from the default locations.
    ///
    /// Returns `None` when no readable, valid config file is found. A file
    /// that exists but fails to parse is logged and skipped.
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".ferro-annotate.toml");
        if cwd_config.exists() {
            match Self::load_from_path(&cwd_config) {
                Ok(config) => return Some(config),
                Err(e) => tracing::warn!("Ignoring {}: {}", cwd_config.display(), e),
            }
        }

        if let Some(home) = dirs_home() {
            let home_config = home.join(".config").join("ferro").join("annotate.toml");
            if home_config.exists() {
                match Self::load_from_path(&home_config) {
                    Ok(config) => return Some(config),
                    Err(e) => tracing::warn!("Ignoring {}: {}", home_config.display(), e),
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, FerroError> {
        let content = fs::read_to_string(path).map_err(|e| FerroError::Config {
            msg: format!("failed to read {}: {}", path.display(), e),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, FerroError> {
        let config: AnnotatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), FerroError> {
        if let Some(biotypes) = &self.coding_biotypes {
            if biotypes.iter().any(|b| b.trim().is_empty()) {
                return Err(FerroError::Config {
                    msg: "coding_biotypes must not contain empty names".to_string(),
                });
            }
            if biotypes.is_empty() {
                tracing::warn!("coding_biotypes is empty; every transcript will be non-coding");
            }
        }
        Ok(())
    }
}

/// Get home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
