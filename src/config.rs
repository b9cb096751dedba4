use crate::encoder::Compression;
use crate::error::EmbedError;
use crate::path::PathNormalizer;
use regex::Regex;
use std::path::PathBuf;

/// Default name of the generated module
pub const DEFAULT_MODULE: &str = "assets";

/// Everything a generation run needs, as supplied by the caller.
///
/// Values are kept in their raw form; [`Config::resolve`] validates them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output file, else stdout (consumed by the binary)
    pub output: Option<PathBuf>,
    /// Name of the generated module
    pub module: String,
    /// Stripped from the front of every file name
    pub prefix: String,
    /// Regex for paths to skip (for example `\.DS_Store`)
    pub ignore: Option<String>,
    /// Regex for files to include; when set, only matching files are embedded
    pub include: Option<String>,
    /// Unix timestamp overriding every file's modification time
    pub mod_time: Option<String>,
    /// Keep generated items crate-private
    pub private: bool,
    /// Store files without compression
    pub no_compression: bool,
    /// Command line recorded in the attribution comment
    pub invocation: String,
    /// Files or directories to embed
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Create a configuration embedding the given roots with default settings
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            output: None,
            module: DEFAULT_MODULE.to_string(),
            prefix: String::new(),
            ignore: None,
            include: None,
            mod_time: None,
            private: false,
            no_compression: false,
            invocation: String::new(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.module = name.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore = Some(pattern.into());
        self
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn mod_time(mut self, timestamp: impl Into<String>) -> Self {
        self.mod_time = Some(timestamp.into());
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn no_compression(mut self, no_compression: bool) -> Self {
        self.no_compression = no_compression;
        self
    }

    pub fn invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = invocation.into();
        self
    }

    /// Validate and compile the configuration.
    ///
    /// Empty pattern and modtime strings count as unset.
    pub fn resolve(&self) -> Result<ResolvedConfig, EmbedError> {
        if self.files.is_empty() {
            return Err(EmbedError::NoInputs);
        }

        if !is_identifier(&self.module) {
            return Err(EmbedError::InvalidModuleName {
                name: self.module.clone(),
            });
        }

        let mod_time = match non_empty(&self.mod_time) {
            Some(value) => Some(value.trim().parse::<i64>().map_err(|source| {
                EmbedError::InvalidModTime {
                    value: value.to_string(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(ResolvedConfig {
            module: self.module.clone(),
            prefix: PathNormalizer::to_slash(std::path::Path::new(&self.prefix)),
            ignore: compile("ignore", non_empty(&self.ignore))?,
            include: compile("include", non_empty(&self.include))?,
            mod_time,
            visibility: if self.private {
                Visibility::Crate
            } else {
                Visibility::Public
            },
            compression: if self.no_compression {
                Compression::Store
            } else {
                Compression::Best
            },
            invocation: self.invocation.clone(),
            files: self.files.clone(),
        })
    }
}

/// Validated configuration threaded through collection, encoding and codegen
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub module: String,
    /// Slash-normalized name-stripping prefix
    pub prefix: String,
    pub ignore: Option<Regex>,
    pub include: Option<Regex>,
    /// Override applied uniformly to every file record
    pub mod_time: Option<i64>,
    pub visibility: Visibility,
    pub compression: Compression,
    pub invocation: String,
    pub files: Vec<PathBuf>,
}

/// Visibility of the generated module and accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Crate,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "pub",
            Visibility::Crate => "pub(crate)",
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn compile(which: &'static str, pattern: Option<&str>) -> Result<Option<Regex>, EmbedError> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|source| EmbedError::InvalidPattern {
                which,
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
