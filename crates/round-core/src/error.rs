use std::path::{Path, PathBuf};

use thiserror::Error;

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while converting a sequence.
/// All of these are fatal to the run; there is no retry or partial recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path is missing, unreadable, or not a decodable animated image.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Source,
    },

    /// The input decoded, but carries no usable animation metadata.
    /// No default is substituted.
    #[error("{} has no {what} metadata", path.display())]
    MissingMetadata { path: PathBuf, what: &'static str },

    /// The output file could not be written.
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: Source,
    },
}

impl Error {
    pub(crate) fn decode(path: &Path, source: impl Into<Source>) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn missing_metadata(path: &Path, what: &'static str) -> Self {
        Error::MissingMetadata {
            path: path.to_path_buf(),
            what,
        }
    }

    pub(crate) fn encode(path: &Path, source: impl Into<Source>) -> Self {
        Error::Encode {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
