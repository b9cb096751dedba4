/// A discovered file, its bytes held in the collection arena
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Byte offset into the arena
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
    /// Normalized virtual path (e.g., "/css/site.css")
    pub virtual_path: String,
    /// Original on-disk path, slash-normalized
    pub local_path: String,
    /// Modification time in Unix seconds
    pub mod_time: i64,
}
