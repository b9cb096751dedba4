use crate::encoder::DecodeError;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by virtual filesystem operations.
///
/// Each error belongs to the single failing call; the registry itself stays
/// usable.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("{path}: file does not exist")]
    NotFound { path: String },

    #[error("{path}: corrupt embedded data: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: Arc<DecodeError>,
    },

    #[error("{path}: contents are not valid UTF-8")]
    NotUtf8 { path: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl VfsError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        VfsError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for unknown virtual paths and for local files missing on disk
    pub fn is_not_found(&self) -> bool {
        match self {
            VfsError::NotFound { .. } => true,
            VfsError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
