use std::path::{Path, MAIN_SEPARATOR};

/// Maps on-disk paths to virtual paths and back.
///
/// Virtual paths always start with `/`, use `/` as the separator and carry no
/// trailing slash (except the root itself).
pub struct PathNormalizer;

impl PathNormalizer {
    /// Convert a virtual path from an on-disk path.
    ///
    /// The prefix is stripped with a plain string comparison, so `/a/b` also
    /// strips the front of `/a/bc/d`. A path that doesn't start with the
    /// prefix keeps its full (slash-normalized) form.
    pub fn normalize(local: &str, prefix: &str) -> String {
        let local = Self::to_slash_str(local);
        let prefix = Self::to_slash_str(prefix);
        let stripped = local.strip_prefix(prefix.as_str()).unwrap_or(&local);
        Self::clean(&format!("/{}", stripped))
    }

    /// Local path for a synthesized directory: the prefix joined back onto the
    /// virtual path, read relative to the working directory.
    pub fn local_dir(prefix: &str, virtual_path: &str) -> String {
        let prefix = Self::to_slash_str(prefix);
        let joined = if prefix.is_empty() {
            Self::clean(virtual_path)
        } else {
            Self::clean(&format!("{}/{}", prefix, virtual_path))
        };

        match joined.strip_prefix('/') {
            Some("") => ".".to_string(),
            Some(relative) => relative.to_string(),
            None => joined,
        }
    }

    /// Lexically clean a slash-separated path.
    ///
    /// Empty and `.` segments are dropped, `..` removes the segment before it.
    /// Rooted paths never climb above `/`; relative paths keep leading `..`.
    /// An empty result becomes `.`.
    pub fn clean(path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }

        let rooted = path.starts_with('/');
        let mut components: Vec<&str> = Vec::new();

        for part in path.split('/') {
            match part {
                "" | "." => continue,
                ".." => match components.last() {
                    Some(last) if *last != ".." => {
                        components.pop();
                    }
                    _ if rooted => {}
                    _ => components.push(".."),
                },
                normal => components.push(normal),
            }
        }

        let joined = components.join("/");
        if rooted {
            format!("/{}", joined)
        } else if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        }
    }

    /// Last element of a slash path. Empty paths give `.`, the root gives `/`.
    pub fn base(path: &str) -> &str {
        if path.is_empty() {
            return ".";
        }
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/";
        }
        match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Slash form of an on-disk path.
    pub fn to_slash(path: &Path) -> String {
        Self::to_slash_str(&path.to_string_lossy())
    }

    fn to_slash_str(path: &str) -> String {
        if MAIN_SEPARATOR == '/' {
            path.to_string()
        } else {
            path.replace(MAIN_SEPARATOR, "/")
        }
    }
}
