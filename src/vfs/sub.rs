use super::{File, FileSystem, VfsError};

/// A filesystem rooted at a prefix of another one.
///
/// The prefix is prepended verbatim, so it should carry its leading slash
/// and no trailing one (e.g. `/static`).
pub struct SubFs<'a> {
    inner: Box<dyn FileSystem<'a> + 'a>,
    prefix: String,
}

impl<'a> SubFs<'a> {
    pub fn new(inner: Box<dyn FileSystem<'a> + 'a>, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }
}

impl<'a> FileSystem<'a> for SubFs<'a> {
    fn open(&self, name: &str) -> Result<Box<dyn File + 'a>, VfsError> {
        self.inner.open(&format!("{}{}", self.prefix, name))
    }
}
