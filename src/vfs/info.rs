use chrono::{DateTime, Utc};
use std::fs::Metadata;

/// Mode reported for embedded files
pub const FILE_MODE: u32 = 0o444;
/// Mode reported for embedded directories
pub const DIR_MODE: u32 = 0o555;

/// Stat information for a file or directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Base name of the entry
    pub name: String,
    /// Size in bytes (uncompressed)
    pub size: u64,
    /// Permission bits
    pub mode: u32,
    pub mod_time: DateTime<Utc>,
    pub is_dir: bool,
}

impl FileInfo {
    pub(crate) fn from_metadata(name: String, metadata: &Metadata) -> Self {
        Self {
            name,
            size: metadata.len(),
            mode: mode_bits(metadata),
            mod_time: metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_default(),
            is_dir: metadata.is_dir(),
        }
    }
}

#[cfg(unix)]
fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_bits(metadata: &Metadata) -> u32 {
    match (metadata.is_dir(), metadata.permissions().readonly()) {
        (true, _) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}
