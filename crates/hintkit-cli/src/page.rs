//! Loading page descriptions and config files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use hintkit_core::config::HintConfig;
use hintkit_core::dom::memory::{MemoryDom, PageSpec};
use hintkit_core::error::ApiError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed page {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid page {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ApiError,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ApiError,
    },
}

fn read(path: &Path) -> Result<String, PageError> {
    fs::read_to_string(path).map_err(|source| PageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and build the page model at `path`.
pub fn load_page(path: &Path) -> Result<MemoryDom, PageError> {
    let json = read(path)?;
    let spec: PageSpec = serde_json::from_str(&json).map_err(|source| PageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded page {} with {} elements", path.display(), spec.elements.len());

    MemoryDom::from_page(&spec).map_err(|source| PageError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the config file at `path`, or start from defaults.
///
/// Environment overrides are applied on top in both cases.
pub fn load_config(path: Option<&Path>) -> Result<HintConfig, PageError> {
    let (config, origin) = match path {
        Some(path) => {
            let config = HintConfig::from_json(&read(path)?).map_err(|source| {
                PageError::Config {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            (config, path.to_path_buf())
        }
        None => (HintConfig::default(), PathBuf::from("<defaults>")),
    };

    config
        .with_env_overrides()
        .map_err(|source| PageError::Config {
            path: origin,
            source,
        })
}
