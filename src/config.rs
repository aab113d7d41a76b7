//! Configuration file support for openssl-buildmeta.
//!
//! Provides YAML-based configuration through `openssl-buildmeta.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "openssl-buildmeta.config.yml";

/// Top-level configuration file schema.
///
/// Config values are defaults; explicit CLI flags always win.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default FIPS certificate identifier for SBOM generation.
    pub fips_certificate: Option<String>,
    /// Default output file path.
    pub output: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref cert) = config.fips_certificate {
        if cert.trim().is_empty() {
            bail!(
                "Invalid config: fips_certificate must not be blank.\n\n\
                 💡 Hint: Supply the certificate identifier (e.g., \"4985\") or remove the field."
            );
        }
    }
    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            bail!(
                "Invalid config: output must not be blank.\n\n\
                 💡 Hint: Supply a file path (e.g., \"sbom.json\") or remove the field."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
