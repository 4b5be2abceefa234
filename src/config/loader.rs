/*!
 * Configuration Loader
 * JSON document parsing and load-time validation
 *
 * Validation runs here so the engine can assume its invariants hold: every
 * folder rule resolves to a permission set, names are unique and non-empty,
 * and depth values are -1 or non-negative. A config that fails any of these
 * never reaches the engine.
 */

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::types::Config;

/// Configuration loading result
#[must_use = "configuration errors must be handled before running the engine"]
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors, surfaced before the engine is invoked
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Malformed config document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Permission set name must not be empty")]
    EmptyPermissionName,

    #[error("Duplicate permission set: {name}")]
    DuplicatePermission { name: String },

    #[error("Rule '{pattern}' references unknown permission set '{name}'")]
    UnknownPermission { pattern: String, name: String },

    #[error("max_scan_depth must be -1 or a non-negative integer ({value} specified)")]
    InvalidScanDepth { value: i32 },

    #[error("star_depth must be -1 or a non-negative integer ({value} specified for '{pattern}')")]
    InvalidStarDepth { pattern: String, value: i32 },
}

/// Load and validate a configuration from a file
pub fn load_path(path: &Path) -> ConfigResult<Config> {
    let document = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_str(&document)
}

/// Load and validate a configuration from a JSON document
pub fn load_str(document: &str) -> ConfigResult<Config> {
    let mut config: Config = serde_json::from_str(document)?;
    normalize(&mut config);
    validate(&config)?;
    debug!(
        "Loaded config: {} permission sets, {} folder rules, max_scan_depth={}",
        config.permissions.len(),
        config.folder_rules.len(),
        config.max_scan_depth
    );
    Ok(config)
}

/// Normalize pattern separators to `/`
///
/// Configs written with Windows-style separators stay usable; separator
/// counts in the matcher's depth arithmetic assume `/`.
fn normalize(config: &mut Config) {
    for rule in &mut config.folder_rules {
        if rule.pattern.contains('\\') {
            rule.pattern = rule.pattern.replace('\\', "/");
        }
    }
}

/// Enforce the rule-model invariants
fn validate(config: &Config) -> ConfigResult<()> {
    if config.max_scan_depth < -1 {
        return Err(ConfigError::InvalidScanDepth {
            value: config.max_scan_depth,
        });
    }

    for (idx, set) in config.permissions.iter().enumerate() {
        if set.name.is_empty() {
            return Err(ConfigError::EmptyPermissionName);
        }
        if config.permissions[..idx].iter().any(|p| p.name == set.name) {
            return Err(ConfigError::DuplicatePermission {
                name: set.name.clone(),
            });
        }
    }

    for rule in &config.folder_rules {
        if rule.star_depth < -1 {
            return Err(ConfigError::InvalidStarDepth {
                pattern: rule.pattern.clone(),
                value: rule.star_depth,
            });
        }
        if config.permission(&rule.permission).is_none() {
            return Err(ConfigError::UnknownPermission {
                pattern: rule.pattern.clone(),
                name: rule.permission.clone(),
            });
        }
    }

    Ok(())
}
