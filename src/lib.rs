// Public API exports
pub mod codegen;
pub mod collector;
pub mod config;
pub mod encoder;
pub mod error;
pub mod path;
pub mod pipeline;
pub mod registry;
pub mod vfs;

// Re-export main types for convenience
pub use collector::{Collection, Collector, SourceFile};
pub use config::{Config, ResolvedConfig, Visibility, DEFAULT_MODULE};
pub use encoder::{Compression, DecodeError};
pub use error::EmbedError;
pub use path::PathNormalizer;
pub use pipeline::{build_bundle, generate};
pub use registry::{Bundle, BundleStats, DirectoryRecord, FileRecord};
pub use vfs::{File, FileInfo, FileSystem, Registry, VfsError};
