use super::entry::{Entry, LazyFile};
use super::VfsError;
use crate::path::PathNormalizer;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only table of embedded entries keyed by virtual path
#[derive(Debug, Default)]
pub struct Registry {
    files: BTreeMap<String, LazyFile>,
    materialized: AtomicUsize,
}

impl Registry {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let files = entries
            .into_iter()
            .map(|entry| (entry.virtual_path.to_string(), LazyFile::new(entry)))
            .collect();

        Self {
            files,
            materialized: AtomicUsize::new(0),
        }
    }

    /// Look up an entry; the name is lexically cleaned first
    pub fn get(&self, name: &str) -> Option<&LazyFile> {
        self.files.get(&PathNormalizer::clean(name))
    }

    pub fn lookup(&self, name: &str) -> Result<&LazyFile, VfsError> {
        self.get(name).ok_or_else(|| VfsError::NotFound {
            path: name.to_string(),
        })
    }

    /// Look up an entry and make sure its contents are decoded
    pub fn materialize(&self, name: &str) -> Result<(&LazyFile, &[u8]), VfsError> {
        let file = self.lookup(name)?;
        let data = self.materialize_file(file)?;
        Ok((file, data))
    }

    pub(crate) fn materialize_file<'a>(&self, file: &'a LazyFile) -> Result<&'a [u8], VfsError> {
        file.materialize(&self.materialized)
    }

    /// Every entry strictly below `dir`, at any depth, in path order
    pub fn descendants<'a>(&'a self, dir: &str) -> impl Iterator<Item = &'a LazyFile> + 'a {
        let dir = PathNormalizer::clean(dir);
        let prefix = if dir == "/" {
            dir.clone()
        } else {
            format!("{}/", dir)
        };

        self.files
            .range(prefix.clone()..)
            .take_while(move |(path, _)| path.starts_with(&prefix))
            .filter(move |(path, _)| **path != dir)
            .map(|(_, file)| file)
    }

    /// All entries in path order
    pub fn iter(&self) -> impl Iterator<Item = &LazyFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// How many entries have been decoded so far
    pub fn materializations(&self) -> usize {
        self.materialized.load(Ordering::Relaxed)
    }
}
