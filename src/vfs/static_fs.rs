use super::{File, FileInfo, FileSystem, LazyFile, Registry, VfsError};
use std::io::{Cursor, Read, Seek, SeekFrom};

/// Serves files from the embedded registry
#[derive(Debug, Clone, Copy)]
pub struct StaticFs<'r> {
    registry: &'r Registry,
}

impl<'r> StaticFs<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }
}

impl<'r> FileSystem<'r> for StaticFs<'r> {
    fn open(&self, name: &str) -> Result<Box<dyn File + 'r>, VfsError> {
        let (file, data) = self.registry.materialize(name)?;
        Ok(Box::new(StaticFile {
            registry: self.registry,
            file,
            cursor: Cursor::new(data),
        }))
    }
}

/// Read-only view of a materialized entry
struct StaticFile<'r> {
    registry: &'r Registry,
    file: &'r LazyFile,
    cursor: Cursor<&'r [u8]>,
}

impl Read for StaticFile<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for StaticFile<'_> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl File for StaticFile<'_> {
    fn stat(&self) -> Result<FileInfo, VfsError> {
        Ok(self.file.info())
    }

    /// Lists every entry below this directory, not only direct children.
    /// Each listed entry is materialized. Regular files list nothing.
    fn readdir(&mut self, count: usize) -> Result<Vec<FileInfo>, VfsError> {
        if !self.file.is_dir() {
            return Ok(Vec::new());
        }

        let limit = if count == 0 { usize::MAX } else { count };
        let mut infos = Vec::new();
        for entry in self
            .registry
            .descendants(self.file.virtual_path())
            .take(limit)
        {
            self.registry.materialize_file(entry)?;
            infos.push(entry.info());
        }
        Ok(infos)
    }

    fn close(&mut self) -> Result<(), VfsError> {
        Ok(())
    }
}
