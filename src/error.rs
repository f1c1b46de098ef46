use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // A source or the packed file could not be opened for reading
    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // The packed file could not be created or truncated
    #[error("could not create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("an error occurred during file I/O: {0}")]
    Io(#[from] io::Error),

    #[error("source ended inside its {expected}-byte header after {got} bytes")]
    ShortHeader { expected: u64, got: u64 },

    // Pixel count of a source was not a multiple of 8
    #[error("source ended with {0} pixels left over, not a whole packed byte")]
    PartialGroup(usize),

    #[error("packed image truncated: expected {expected} bytes, got {got}")]
    TruncatedImage { expected: usize, got: usize },

    #[error("packed file holds {found} images, {requested} were requested")]
    MissingImages { requested: usize, found: usize },

    #[error("could not write pixel grid: {0}")]
    Grid(#[from] csv::Error),
}
