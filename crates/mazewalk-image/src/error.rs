use std::path::PathBuf;

use mazewalk_core::GridError;
use thiserror::Error;

/// Errors raised while reading or writing maze images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file could not be opened, decoded or encoded.
    #[error("{}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded pixels do not form a usable grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
