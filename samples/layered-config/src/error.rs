//! Errors raised while loading and resolving configuration layers.

use std::path::PathBuf;

use recursive_partial::IncompleteError;
use thiserror::Error;

/// Failure to turn a layer file into a partial configuration.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The file could not be read.
    #[error("failed to read layer {path}: {source}")]
    Read {
        /// Layer file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the partial configuration.
    #[error("invalid YAML layer {path}: {source}")]
    Yaml {
        /// Layer file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The file is not valid JSON for the partial configuration.
    #[error("invalid JSON layer {path}: {source}")]
    Json {
        /// Layer file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl LayerError {
    /// Returns the path of the layer that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Yaml { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

/// Failure to produce a final configuration.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A layer failed to load.
    #[error(transparent)]
    Layer(#[from] LayerError),

    /// Completion was required and the layers left fields unset.
    #[error("layers do not define a complete configuration: {0}")]
    Incomplete(#[from] IncompleteError),
}
