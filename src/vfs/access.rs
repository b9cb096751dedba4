use super::{FileSystem, LocalFs, Registry, VfsError};
use std::io::Read;

/// Full contents of a named entry.
///
/// In local mode the file is read from disk; otherwise the embedded copy is
/// returned.
pub fn read_bytes(registry: &Registry, use_local: bool, name: &str) -> Result<Vec<u8>, VfsError> {
    if use_local {
        let mut file = LocalFs::new(registry).open(name)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| VfsError::io(name, e))?;
        file.close()?;
        return Ok(data);
    }

    let (_, data) = registry.materialize(name)?;
    Ok(data.to_vec())
}

/// Like [`read_bytes`], but panics if the entry can't be read
pub fn must_read_bytes(registry: &Registry, use_local: bool, name: &str) -> Vec<u8> {
    read_bytes(registry, use_local, name).unwrap_or_else(|err| panic!("{}", err))
}

/// Contents of a named entry as UTF-8 text
pub fn read_string(registry: &Registry, use_local: bool, name: &str) -> Result<String, VfsError> {
    let data = read_bytes(registry, use_local, name)?;
    String::from_utf8(data).map_err(|_| VfsError::NotUtf8 {
        path: name.to_string(),
    })
}

/// Like [`read_string`], but panics if the entry can't be read
pub fn must_read_string(registry: &Registry, use_local: bool, name: &str) -> String {
    read_string(registry, use_local, name).unwrap_or_else(|err| panic!("{}", err))
}
