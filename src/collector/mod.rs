mod entry;


pub use entry::SourceFile;

use crate::config::ResolvedConfig;
use crate::error::EmbedError;
use crate::path::PathNormalizer;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Immutable result of a collection pass with arena-backed file storage
#[derive(Debug)]
pub struct Collection {
    /// Single contiguous blob containing all file data
    arena: Vec<u8>,
    /// Index mapping virtual paths to arena slices, sorted by virtual path
    index: BTreeMap<String, SourceFile>,
}

/// Breadth-first file discovery over a set of roots
pub struct Collector {
    prefix: String,
    ignore: Option<Regex>,
    include: Option<Regex>,
    arena: Vec<u8>,
    index: BTreeMap<String, SourceFile>,
}

impl Collector {
    /// Create a collector stripping `prefix` from discovered names
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ignore: None,
            include: None,
            arena: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Create a collector with the prefix and filters of a resolved config
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.prefix.clone())
            .ignore(config.ignore.clone())
            .include(config.include.clone())
    }

    /// Skip paths matching this pattern; matching directories are pruned
    pub fn ignore(mut self, pattern: Option<Regex>) -> Self {
        self.ignore = pattern;
        self
    }

    /// Only register regular files matching this pattern
    pub fn include(mut self, pattern: Option<Regex>) -> Self {
        self.include = pattern;
        self
    }

    /// Register one file under the virtual path derived from `local_path`.
    ///
    /// A second file landing on an existing virtual path is an error naming
    /// both sources.
    pub fn add_file(
        &mut self,
        local_path: &str,
        data: &[u8],
        mod_time: i64,
    ) -> Result<(), EmbedError> {
        let local_path = PathNormalizer::to_slash(Path::new(local_path));
        let virtual_path = PathNormalizer::normalize(&local_path, &self.prefix);

        if let Some(existing) = self.index.get(&virtual_path) {
            return Err(EmbedError::Duplicate {
                virtual_path,
                first: existing.local_path.clone(),
                second: local_path,
            });
        }

        let offset = self.arena.len();
        self.arena.extend_from_slice(data);

        debug!(%virtual_path, local = %local_path, bytes = data.len(), "registered file");
        self.index.insert(
            virtual_path.clone(),
            SourceFile {
                offset,
                length: data.len(),
                virtual_path,
                local_path,
                mod_time,
            },
        );

        Ok(())
    }

    /// Walk every root breadth-first and build the collection.
    ///
    /// Any filesystem error aborts the whole pass.
    pub fn collect<P: AsRef<Path>>(mut self, roots: &[P]) -> Result<Collection, EmbedError> {
        let mut queue: VecDeque<PathBuf> = roots.iter().map(|r| r.as_ref().to_path_buf()).collect();

        while let Some(path) = queue.pop_front() {
            let raw = PathNormalizer::to_slash(&path);

            if self.ignore.as_ref().is_some_and(|re| re.is_match(&raw)) {
                debug!(path = %raw, "ignored");
                continue;
            }

            let metadata = fs::metadata(&path).map_err(|e| EmbedError::io(&path, e))?;

            if metadata.is_dir() {
                queue.extend(Self::children(&path)?);
            } else if metadata.is_file() {
                if self.include.as_ref().is_some_and(|re| !re.is_match(&raw)) {
                    debug!(path = %raw, "not included");
                    continue;
                }
                let data = fs::read(&path).map_err(|e| EmbedError::io(&path, e))?;
                let modified = metadata.modified().map_err(|e| EmbedError::io(&path, e))?;
                self.add_file(&raw, &data, DateTime::<Utc>::from(modified).timestamp())?;
            } else {
                debug!(path = %raw, "skipping special file");
            }
        }

        Ok(self.build())
    }

    /// Immediate children of a directory, sorted by name, lexically cleaned
    fn children(dir: &Path) -> Result<Vec<PathBuf>, EmbedError> {
        let mut children = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| EmbedError::io(dir, e.into()))?;
            let joined = PathNormalizer::to_slash(entry.path());
            children.push(PathBuf::from(PathNormalizer::clean(&joined)));
        }
        Ok(children)
    }

    /// Freeze the collected files
    pub fn build(self) -> Collection {
        Collection {
            arena: self.arena,
            index: self.index,
        }
    }
}

impl Collection {
    /// Get a file's contents by virtual path (zero-copy)
    pub fn get(&self, virtual_path: &str) -> Option<&[u8]> {
        self.index
            .get(virtual_path)
            .map(|entry| self.data(entry))
    }

    /// Contents of an indexed file
    pub fn data(&self, entry: &SourceFile) -> &[u8] {
        &self.arena[entry.offset..entry.offset + entry.length]
    }

    /// All files in sorted virtual path order
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.index.values()
    }

    /// Sorted virtual paths of all files
    pub fn virtual_paths(&self) -> Vec<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// Get metadata for a file without reading contents
    pub fn get_entry(&self, virtual_path: &str) -> Option<&SourceFile> {
        self.index.get(virtual_path)
    }

    pub fn file_count(&self) -> usize {
        self.index.len()
    }

    /// Total raw bytes across all files
    pub fn total_size(&self) -> usize {
        self.arena.len()
    }
}
