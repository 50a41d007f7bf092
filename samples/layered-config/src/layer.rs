//! Loading layer files and resolving them into a configuration.
//!
//! A layer is a YAML or JSON document holding any subset of the
//! configuration keys. Layers are combined in order, later ones winning,
//! and the result is either overlaid onto the defaults or completed on its
//! own.

use std::path::{Path, PathBuf};

use recursive_partial::{Complete, Overlay, combine_all};

use crate::config::{PartialServiceConfig, ServiceConfig};
use crate::error::{LayerError, ResolveError};

/// Document format of a layer file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl LayerFormat {
    /// Picks the format from the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// How the combined layers become a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Overlay the layers onto `ServiceConfig::default()`.
    #[default]
    OverDefaults,
    /// Ignore the defaults; every field must come from a layer.
    RequireComplete,
}

/// A parsed layer together with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Source file.
    pub path: PathBuf,
    /// Keys defined by the file.
    pub overrides: PartialServiceConfig,
}

/// Parses layer contents in the given format.
///
/// # Errors
///
/// Returns [`LayerError`] when the document is malformed, contains unknown
/// keys, or holds a value of the wrong type.
pub fn parse_layer(contents: &str, format: LayerFormat, path: &Path) -> Result<Layer, LayerError> {
    let overrides = match format {
        LayerFormat::Yaml if contents.trim().is_empty() => PartialServiceConfig::default(),
        LayerFormat::Yaml => serde_yaml::from_str(contents).map_err(|source| LayerError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        LayerFormat::Json => serde_json::from_str(contents).map_err(|source| LayerError::Json {
            path: path.to_path_buf(),
            source,
        })?,
    };

    Ok(Layer {
        path: path.to_path_buf(),
        overrides,
    })
}

/// Reads and parses a layer file.
///
/// # Errors
///
/// Returns [`LayerError`] when the file cannot be read or parsed.
pub fn load_layer(path: &Path) -> Result<Layer, LayerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LayerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layer(&contents, LayerFormat::from_path(path), path)
}

/// Combines `layers` in order and resolves them into a configuration.
///
/// # Errors
///
/// Returns [`ResolveError::Incomplete`] when `resolution` requires a
/// complete configuration and some fields are unset.
pub fn resolve(layers: Vec<Layer>, resolution: Resolution) -> Result<ServiceConfig, ResolveError> {
    for layer in &layers {
        tracing::info!(
            path = %layer.path.display(),
            empty = layer.overrides.is_empty(),
            "applying configuration layer"
        );
    }

    let layer_count = layers.len();
    let combined = combine_all::<ServiceConfig, _>(layers.into_iter().map(|layer| layer.overrides));

    let config = match resolution {
        Resolution::OverDefaults => ServiceConfig::default().overlaid(combined),
        Resolution::RequireComplete => ServiceConfig::try_complete(combined)?,
    };

    tracing::info!(layers = layer_count, ?resolution, "configuration resolved");
    Ok(config)
}

/// Loads every path in order and resolves the result.
///
/// # Errors
///
/// Returns the first [`LayerError`], or [`ResolveError::Incomplete`].
pub fn load_and_resolve(
    paths: &[PathBuf],
    resolution: Resolution,
) -> Result<ServiceConfig, ResolveError> {
    let layers = paths
        .iter()
        .map(|path| load_layer(path))
        .collect::<Result<Vec<_>, _>>()?;
    resolve(layers, resolution)
}
