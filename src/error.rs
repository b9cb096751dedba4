use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run. No output is produced when any of
/// these is returned.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("modtime must be an integer Unix timestamp, got {value:?}")]
    InvalidModTime {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid {which} pattern {pattern:?}")]
    InvalidPattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid module name {name:?}: must be a Rust identifier")]
    InvalidModuleName { name: String },

    #[error("no input files or directories given")]
    NoInputs,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{virtual_path}: duplicate name after prefix removal ({first} and {second})")]
    Duplicate {
        virtual_path: String,
        first: String,
        second: String,
    },

    #[error("{virtual_path}: file {local} collides with a synthesized directory")]
    FileDirConflict { virtual_path: String, local: String },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to expand generated code: {0}")]
    Codegen(#[from] std::fmt::Error),
}

impl EmbedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmbedError::Io {
            path: path.into(),
            source,
        }
    }
}
