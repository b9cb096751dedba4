use super::info::{FileInfo, DIR_MODE, FILE_MODE};
use super::VfsError;
use crate::encoder::{self, DecodeError};
use crate::path::PathNormalizer;
use chrono::DateTime;
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// One row of the generated table.
///
/// The `const` constructors let generated source declare the whole table as
/// a `static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub virtual_path: Cow<'static, str>,
    pub local_path: Cow<'static, str>,
    /// Size before compression; zero for directories
    pub size: u64,
    /// Unix seconds
    pub mod_time: i64,
    /// Base64 gzip payload; empty for directories
    pub payload: Cow<'static, str>,
    pub is_dir: bool,
}

impl Entry {
    pub const fn file(
        virtual_path: &'static str,
        local_path: &'static str,
        size: u64,
        mod_time: i64,
        payload: &'static str,
    ) -> Self {
        Self {
            virtual_path: Cow::Borrowed(virtual_path),
            local_path: Cow::Borrowed(local_path),
            size,
            mod_time,
            payload: Cow::Borrowed(payload),
            is_dir: false,
        }
    }

    pub const fn dir(virtual_path: &'static str, local_path: &'static str) -> Self {
        Self {
            virtual_path: Cow::Borrowed(virtual_path),
            local_path: Cow::Borrowed(local_path),
            size: 0,
            mod_time: 0,
            payload: Cow::Borrowed(""),
            is_dir: true,
        }
    }

    pub fn owned_file(
        virtual_path: String,
        local_path: String,
        size: u64,
        mod_time: i64,
        payload: String,
    ) -> Self {
        Self {
            virtual_path: Cow::Owned(virtual_path),
            local_path: Cow::Owned(local_path),
            size,
            mod_time,
            payload: Cow::Owned(payload),
            is_dir: false,
        }
    }

    pub fn owned_dir(virtual_path: String, local_path: String) -> Self {
        Self {
            virtual_path: Cow::Owned(virtual_path),
            local_path: Cow::Owned(local_path),
            size: 0,
            mod_time: 0,
            payload: Cow::Borrowed(""),
            is_dir: true,
        }
    }
}

/// An entry whose contents are decoded on first use, exactly once.
///
/// The outcome, bytes or error, is kept for the life of the registry.
#[derive(Debug)]
pub struct LazyFile {
    entry: Entry,
    data: OnceLock<Result<Vec<u8>, Arc<DecodeError>>>,
}

impl LazyFile {
    pub(crate) fn new(entry: Entry) -> Self {
        Self {
            entry,
            data: OnceLock::new(),
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn virtual_path(&self) -> &str {
        &self.entry.virtual_path
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir
    }

    pub fn is_materialized(&self) -> bool {
        self.data.get().is_some()
    }

    /// Decode the payload if no caller has yet; concurrent callers wait on
    /// the same initialization.
    pub(crate) fn materialize(&self, counter: &AtomicUsize) -> Result<&[u8], VfsError> {
        let outcome = self.data.get_or_init(|| {
            counter.fetch_add(1, Ordering::Relaxed);
            trace!(path = %self.entry.virtual_path, size = self.entry.size, "materializing");
            encoder::decode(&self.entry.payload, self.entry.size).map_err(Arc::new)
        });

        match outcome {
            Ok(data) => Ok(data.as_slice()),
            Err(err) => Err(VfsError::Corrupt {
                path: self.entry.virtual_path.to_string(),
                source: Arc::clone(err),
            }),
        }
    }

    /// Stat information taken from the record itself
    pub fn info(&self) -> FileInfo {
        FileInfo {
            name: PathNormalizer::base(&self.entry.local_path).to_string(),
            size: self.entry.size,
            mode: if self.entry.is_dir { DIR_MODE } else { FILE_MODE },
            mod_time: DateTime::from_timestamp(self.entry.mod_time, 0).unwrap_or_default(),
            is_dir: self.entry.is_dir,
        }
    }
}
