/// Fixed runtime glue opening every generated file.
///
/// Placeholders: `@INVOCATION@`, `@VIS@`, `@MODULE@`.
pub(super) const HEADER: &str = r#"// Code generated by "embedfs@INVOCATION@"; DO NOT EDIT.

#[allow(dead_code)]
@VIS@ mod @MODULE@ {
    use embedfs::vfs::{self, Entry, FileSystem, Registry, VfsError};
    use std::sync::OnceLock;

    /// Embedded entries, loaded on first use and kept for the life of the process.
    @VIS@ fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Registry::from_entries(ENTRIES.iter().cloned()))
    }

    /// Filesystem over the embedded assets. If `use_local` is true, the
    /// original files on disk are served instead.
    @VIS@ fn fs(use_local: bool) -> Box<dyn FileSystem<'static>> {
        vfs::select(registry(), use_local)
    }

    /// Like [`fs`], rooted at `prefix`.
    @VIS@ fn dir(use_local: bool, prefix: &str) -> Box<dyn FileSystem<'static>> {
        vfs::sub(registry(), use_local, prefix)
    }

    /// Contents of the named file. If `use_local` is true, it is read from disk.
    @VIS@ fn read_bytes(use_local: bool, name: &str) -> Result<Vec<u8>, VfsError> {
        vfs::read_bytes(registry(), use_local, name)
    }

    /// Like [`read_bytes`], but panics if `name` can't be read.
    @VIS@ fn must_read_bytes(use_local: bool, name: &str) -> Vec<u8> {
        vfs::must_read_bytes(registry(), use_local, name)
    }

    /// String version of [`read_bytes`].
    @VIS@ fn read_string(use_local: bool, name: &str) -> Result<String, VfsError> {
        vfs::read_string(registry(), use_local, name)
    }

    /// String version of [`must_read_bytes`].
    @VIS@ fn must_read_string(use_local: bool, name: &str) -> String {
        vfs::must_read_string(registry(), use_local, name)
    }

    static ENTRIES: &[Entry] = &[
"#;

/// Closes the entry table and the module
pub(super) const FOOTER: &str = "    ];\n}\n";
