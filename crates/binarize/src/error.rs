use binarize_core::{ImageError, ParamError};
#[cfg(feature = "image")]
use std::path::PathBuf;

/// Errors produced by the facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum BinarizeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Buffer(#[from] ImageError),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[cfg(feature = "image")]
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[cfg(feature = "image")]
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}
