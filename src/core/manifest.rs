//! Build manifests.
//!
//! A manifest is a JSON array of source path fragments, stored as
//! `<name>.json` in the working directory. The listed order is the
//! concatenation order and is preserved verbatim.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// An ordered list of source file fragments for one logical group of inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    files: Vec<String>,
}

/// Errors raised while loading a manifest. Both are fatal to the build:
/// there is no partial recovery from a missing or malformed manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest {} is not a JSON list of paths", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Manifest {
    /// Load the manifest stored at `path`.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The listed path fragments, in concatenation order.
    pub fn files(&self) -> &[String] {
        &self.files
    }
}
