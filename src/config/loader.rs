//! YAML config loading

use super::validate::validate_config;
use crate::eval::EvalConfig;
use admet_eval_common::{AdmetError, Result};
use std::fs;
use std::path::Path;

/// Load and validate an evaluation config from a YAML file.
///
/// Missing fields take their defaults, so an empty mapping is the default
/// leaderboard configuration.
///
/// # Example
///
/// ```no_run
/// use admet_eval::config::load_config;
///
/// let config = load_config("eval.yaml")?;
/// println!("{} endpoints", config.endpoints.len());
/// # Ok::<(), admet_eval::AdmetError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EvalConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AdmetError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let yaml = fs::read_to_string(path)
        .map_err(|e| AdmetError::io(format!("reading {}", path.display()), e))?;
    let config = parse_config(&yaml).map_err(|e| AdmetError::ConfigParsing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_config(&config)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path` if given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<EvalConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(EvalConfig::default()),
    }
}

fn parse_config(yaml: &str) -> std::result::Result<EvalConfig, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(EvalConfig::default());
    }
    serde_yaml::from_str(yaml)
}
