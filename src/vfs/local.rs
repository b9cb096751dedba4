use super::{File, FileInfo, FileSystem, Registry, VfsError};
use crate::path::PathNormalizer;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

/// Serves registry entries from their original files on disk, so edits show
/// up without regenerating
#[derive(Debug, Clone, Copy)]
pub struct LocalFs<'r> {
    registry: &'r Registry,
}

impl<'r> LocalFs<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }
}

impl<'r> FileSystem<'r> for LocalFs<'r> {
    fn open(&self, name: &str) -> Result<Box<dyn File + 'r>, VfsError> {
        let entry = self.registry.lookup(name)?.entry();
        let path = PathBuf::from(&*entry.local_path);
        let file = fs::File::open(&path).map_err(|e| VfsError::io(entry.local_path.to_string(), e))?;
        Ok(Box::new(LocalFile { path, file }))
    }
}

struct LocalFile {
    path: PathBuf,
    file: fs::File,
}

impl LocalFile {
    fn display(&self) -> String {
        PathNormalizer::to_slash(&self.path)
    }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.file.seek(pos)
    }
}

impl File for LocalFile {
    fn stat(&self) -> Result<FileInfo, VfsError> {
        let metadata = self.file.metadata().map_err(|e| VfsError::io(self.display(), e))?;
        let name = PathNormalizer::base(&self.display()).to_string();
        Ok(FileInfo::from_metadata(name, &metadata))
    }

    /// Immediate children from the real directory, sorted by name
    fn readdir(&mut self, count: usize) -> Result<Vec<FileInfo>, VfsError> {
        let mut entries = fs::read_dir(&self.path)
            .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
            .map_err(|e| VfsError::io(self.display(), e))?;
        entries.sort_by_key(|entry| entry.file_name());

        let limit = if count == 0 { usize::MAX } else { count };
        entries
            .into_iter()
            .take(limit)
            .map(|entry| -> Result<FileInfo, VfsError> {
                let metadata = entry
                    .metadata()
                    .map_err(|e| VfsError::io(PathNormalizer::to_slash(&entry.path()), e))?;
                let name = entry.file_name().to_string_lossy().into_owned();
                Ok(FileInfo::from_metadata(name, &metadata))
            })
            .collect()
    }

    fn close(&mut self) -> Result<(), VfsError> {
        Ok(())
    }
}
