/// Error taxonomy for the art pipeline.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtError>;

/// The caller handed us something we refuse to turn into art.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("digest too short for a seed: need {needed} hex characters, got {got}")]
    ShortDigest { needed: usize, got: usize },

    #[error("digest prefix is not hexadecimal: {prefix:?}")]
    MalformedDigest { prefix: String },

    #[error("palette is empty")]
    EmptyPalette,

    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("{width}x{height} grid at cell size {cell_size} does not fit a u32 canvas")]
    CanvasTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },

    #[error("invalid color {value:?}, expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("invalid theme {value:?}, expected light or dark")]
    InvalidTheme { value: String },
}

/// Something outside the pipeline is missing or broken.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("drawing surface unavailable: {reason}")]
    SurfaceUnavailable { reason: String },

    #[error("could not encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ArtError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

impl ArtError {
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    #[must_use]
    pub fn surface_unavailable(reason: impl Into<String>) -> Self {
        Self::Environment(EnvironmentError::SurfaceUnavailable {
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        let err: ArtError = InputError::EmptyPalette.into();
        assert!(err.is_input());
        assert_eq!(err.to_string(), "palette is empty");
    }

    #[test]
    fn environment_errors_are_not_input() {
        let err = ArtError::surface_unavailable("no canvas");
        assert!(!err.is_input());
        assert_eq!(err.to_string(), "drawing surface unavailable: no canvas");
    }
}
