use std::path::PathBuf;

use thiserror::Error;
use tritone::{PaletteError, PosterError, ThresholdError};

/// Failure to turn one input file into a poster.
///
/// Every variant carries the path it concerns so a batch report can be read
/// without cross-referencing.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No images selected")]
    NoInputs,

    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: PosterError,
    },

    #[error("Input has no file name: {}", path.display())]
    NoFileStem { path: PathBuf },

    #[error("Failed to process {}: {source}", path.display())]
    Pipeline {
        path: PathBuf,
        #[source]
        source: PosterError,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] ThresholdError),

    #[error("Target height must be at least 1")]
    TargetHeight,

    #[error("Output suffix must not contain path separators: {0:?}")]
    Suffix(String),
}
