use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for biopsycat operations
pub type Result<T> = std::result::Result<T, BiopsycatError>;

/// Error types for biopsycat operations
#[derive(Error, Debug)]
pub enum BiopsycatError {
    /// Filesystem error tied to a specific path
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// NIfTI reading or writing error
    #[error("NIfTI error at {}: {message}", .path.display())]
    Nifti { path: PathBuf, message: String },

    /// Volume cannot be processed as a 3D mask
    #[error("Invalid volume: {0}")]
    InvalidVolume(String),

    /// Mask has no non-zero voxels, so its centroid is undefined
    #[error("Empty mask: {} has no non-zero voxels", .path.display())]
    EmptyMask { path: PathBuf },

    /// Voxel spacing could not be parsed
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(String),

    /// Catalog serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BiopsycatError {
    /// Wraps an I/O error with the path that caused it
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        BiopsycatError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wraps a nifti crate error with the path that caused it
    pub fn nifti(path: impl AsRef<Path>, source: nifti::NiftiError) -> Self {
        BiopsycatError::Nifti {
            path: path.as_ref().to_path_buf(),
            message: source.to_string(),
        }
    }

    /// Returns whether this error is an empty-mask failure
    pub fn is_empty_mask(&self) -> bool {
        matches!(self, BiopsycatError::EmptyMask { .. })
    }
}

/// Extension for attaching a path to `std::io::Result`
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| BiopsycatError::io(path, e))
    }
}
