use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a split run.
///
/// Unclassifiable notice content is never an error; it is dropped during the scan.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("The file {} does not exist.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
