// The two things the tool does with the dataset files on disk

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

mod convert;
pub use convert::convert;

mod verify;
pub use verify::verify;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })
}
