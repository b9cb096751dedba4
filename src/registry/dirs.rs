use crate::path::PathNormalizer;
use std::collections::BTreeSet;

/// A directory implied by the embedded files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub virtual_path: String,
    /// Where local mode finds this directory, relative to the working directory
    pub local_path: String,
}

/// Every ancestor directory of the given file paths, plus the root, sorted.
pub fn synthesize<'a, I>(file_paths: I, prefix: &str) -> Vec<DirectoryRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dirs = BTreeSet::from(["/".to_string()]);

    for path in file_paths {
        let mut current = parent(path);
        while current != "/" {
            dirs.insert(current.to_string());
            current = parent(current);
        }
    }

    dirs.into_iter()
        .map(|virtual_path| DirectoryRecord {
            local_path: PathNormalizer::local_dir(prefix, &virtual_path),
            virtual_path,
        })
        .collect()
}

/// Parent of a rooted virtual path; the root is its own parent
fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}
