mod dirs;


pub use dirs::{synthesize, DirectoryRecord};

use crate::collector::Collection;
use crate::config::ResolvedConfig;
use crate::encoder;
use crate::error::EmbedError;
use crate::vfs::{self, Entry};

/// An encoded file, ready to be written into the generated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub virtual_path: String,
    /// Original on-disk path, slash-normalized
    pub local_path: String,
    /// Size before compression
    pub size: u64,
    /// Effective modification time in Unix seconds
    pub mod_time: i64,
    /// Compressed, base64-encoded contents
    pub payload: String,
}

/// Everything one generation run produces, sorted by virtual path
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub files: Vec<FileRecord>,
    pub dirs: Vec<DirectoryRecord>,
}

/// Summary numbers for a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleStats {
    pub file_count: usize,
    pub dir_count: usize,
    pub raw_bytes: u64,
    pub encoded_bytes: u64,
}

impl Bundle {
    /// Encode every collected file and synthesize the directory entries.
    pub fn build(collection: &Collection, config: &ResolvedConfig) -> Result<Self, EmbedError> {
        let mut files = Vec::with_capacity(collection.file_count());

        for source in collection.files() {
            let data = collection.data(source);
            let payload = encoder::encode(data, config.compression).map_err(|source_err| {
                EmbedError::Encode {
                    path: source.local_path.clone(),
                    source: source_err,
                }
            })?;

            files.push(FileRecord {
                virtual_path: source.virtual_path.clone(),
                local_path: source.local_path.clone(),
                size: data.len() as u64,
                mod_time: config.mod_time.unwrap_or(source.mod_time),
                payload,
            });
        }

        let dirs = synthesize(collection.virtual_paths(), &config.prefix);

        // A file sitting where another file implies a directory can't be served
        for dir in &dirs {
            if let Some(file) = collection.get_entry(&dir.virtual_path) {
                return Err(EmbedError::FileDirConflict {
                    virtual_path: dir.virtual_path.clone(),
                    local: file.local_path.clone(),
                });
            }
        }

        Ok(Self { files, dirs })
    }

    pub fn stats(&self) -> BundleStats {
        BundleStats {
            file_count: self.files.len(),
            dir_count: self.dirs.len(),
            raw_bytes: self.files.iter().map(|f| f.size).sum(),
            encoded_bytes: self.files.iter().map(|f| f.payload.len() as u64).sum(),
        }
    }

    /// Runtime entries equivalent to the generated table
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        let files = self.files.iter().map(|f| {
            Entry::owned_file(
                f.virtual_path.clone(),
                f.local_path.clone(),
                f.size,
                f.mod_time,
                f.payload.clone(),
            )
        });
        let dirs = self
            .dirs
            .iter()
            .map(|d| Entry::owned_dir(d.virtual_path.clone(), d.local_path.clone()));
        files.chain(dirs)
    }

    /// Serve this bundle directly, without generating and compiling source
    pub fn to_registry(&self) -> vfs::Registry {
        vfs::Registry::from_entries(self.entries())
    }
}
