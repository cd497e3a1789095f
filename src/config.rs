//! JSON runtime configuration.
//!
//! ```json
//! { "params": { "blockCount": 4, "orientations": [8, 8, 4] } }
//! ```
//!
//! Every key is optional; missing values fall back to the adapter defaults.
use crate::error::GistError;
use crate::params::GistParams;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub params: GistParams,
}

pub fn load_config(path: &Path) -> Result<AdapterConfig, GistError> {
    let contents = fs::read_to_string(path).map_err(|e| GistError::Io {
        path: path.to_path_buf(),
        reason: format!("failed to read config: {e}"),
    })?;
    parse_config_str(&contents).map_err(|e| match e {
        GistError::InvalidConfiguration { reason } => GistError::InvalidConfiguration {
            reason: format!("{}: {reason}", path.display()),
        },
        other => other,
    })
}

pub fn parse_config_str(contents: &str) -> Result<AdapterConfig, GistError> {
    let config: AdapterConfig = serde_json::from_str(contents)
        .map_err(|e| GistError::invalid_config(format!("failed to parse config: {e}")))?;
    config.params.validate()?;
    Ok(config)
}
