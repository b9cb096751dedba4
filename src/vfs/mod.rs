//! Runtime side of an embedded filesystem.
//!
//! Two backends answer the same calls: [`StaticFs`] serves the embedded
//! registry and decodes each entry at most once, [`LocalFs`] reads the
//! original files from disk during development.

mod access;
mod entry;
mod error;
mod info;
mod local;
mod registry;
mod static_fs;
mod sub;


pub use access::{must_read_bytes, must_read_string, read_bytes, read_string};
pub use entry::{Entry, LazyFile};
pub use error::VfsError;
pub use info::{FileInfo, DIR_MODE, FILE_MODE};
pub use local::LocalFs;
pub use registry::Registry;
pub use static_fs::StaticFs;
pub use sub::SubFs;

use std::io::{Read, Seek};

/// Anything that can open entries by virtual path.
///
/// Opened files may borrow from the registry for `'r`, but never from the
/// filesystem value itself.
pub trait FileSystem<'r>: Send + Sync {
    fn open(&self, name: &str) -> Result<Box<dyn File + 'r>, VfsError>;
}

/// An open file or directory
pub trait File: Read + Seek + Send {
    fn stat(&self) -> Result<FileInfo, VfsError>;

    /// Directory listing; `count == 0` returns everything, otherwise at most
    /// `count` entries
    fn readdir(&mut self, count: usize) -> Result<Vec<FileInfo>, VfsError>;

    fn close(&mut self) -> Result<(), VfsError>;
}

/// Pick the local or the static backend
pub fn select(registry: &Registry, use_local: bool) -> Box<dyn FileSystem<'_> + '_> {
    if use_local {
        Box::new(LocalFs::new(registry))
    } else {
        Box::new(StaticFs::new(registry))
    }
}

/// A backend rooted at `prefix`
pub fn sub<'r>(
    registry: &'r Registry,
    use_local: bool,
    prefix: &str,
) -> Box<dyn FileSystem<'r> + 'r> {
    Box::new(SubFs::new(select(registry, use_local), prefix))
}
