//! Configuration for convo-notes
//!
//! Looked up in order: an explicit `--config` path, then
//! `$CONVO_NOTES_CONFIG_DIR/config.toml`, then
//! `<user config dir>/convo-notes/config.toml`. When no file exists the
//! built-in taxonomies are used.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_config;
use crate::error::{ConvoError, Result};
use crate::taxonomy::TaxonomyEntry;
use crate::topics::TopicRule;

pub use types::{ConverterConfig, NoteConfig, ScanConfig};

const CONFIG_DIR: &str = "convo-notes";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CONVO_NOTES_CONFIG_DIR";

impl ConverterConfig {
    /// Default location of the user config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the explicit file if given (it must exist), otherwise the user
    /// config file if present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConvoError::input_not_found("config file", path));
            }
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using built-in taxonomies");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConvoError::io_operation("read config", path.display(), e))?;
        let config: ConverterConfig =
            toml::from_str(&content).map_err(|e| ConvoError::invalid_config(path, e))?;
        config.validate(path)?;
        tracing::debug!(
            path = %path.display(),
            domains = config.domains.len(),
            activities = config.activities.len(),
            topics = config.topics.len(),
            "config_loaded"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConvoError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| ConvoError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    fn validate(&self, path: &Path) -> Result<()> {
        validate_taxonomy(path, "domains", &self.domains)?;
        validate_taxonomy(path, "activities", &self.activities)?;

        for rule in &self.topics {
            match rule {
                TopicRule::Pattern {
                    label,
                    any,
                    requires,
                } => {
                    if label.trim().is_empty() {
                        bail_config!(path, "topic pattern with an empty label");
                    }
                    if any.is_empty() {
                        bail_config!(path, format!("topic {:?} has no keywords", label));
                    }
                    // An empty keyword is contained in every text
                    if any.iter().chain(requires).any(|k| k.is_empty()) {
                        bail_config!(path, format!("topic {:?} has an empty keyword", label));
                    }
                }
                TopicRule::Tools { names } => {
                    if names.iter().any(|n| n.trim().is_empty()) {
                        bail_config!(path, "tool list contains an empty name");
                    }
                }
            }
        }

        if self.scan.pattern.trim().is_empty() {
            bail_config!(path, "scan.pattern is empty");
        }

        Ok(())
    }
}

fn validate_taxonomy(path: &Path, section: &str, entries: &[TaxonomyEntry]) -> Result<()> {
    for entry in entries {
        if entry.label.trim().is_empty() {
            bail_config!(path, format!("{} entry with an empty label", section));
        }
        if entry.keywords.is_empty() || entry.keywords.iter().any(|k| k.is_empty()) {
            bail_config!(
                path,
                format!("{} entry {:?} needs non-empty keywords", section, entry.label)
            );
        }
    }
    Ok(())
}
