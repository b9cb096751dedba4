mod error;


pub use error::DecodeError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Width of the base64 lines emitted into generated source
pub const LINE_WIDTH: usize = 80;

/// How file contents are stored in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// gzip at maximum compression
    #[default]
    Best,
    /// gzip framing around stored (uncompressed) blocks
    Store,
}

impl Compression {
    fn level(self) -> flate2::Compression {
        match self {
            Compression::Best => flate2::Compression::best(),
            Compression::Store => flate2::Compression::none(),
        }
    }
}

/// Compress `data` and encode it as standard base64.
///
/// The gzip header carries no timestamp or file name, so identical input
/// always produces identical text.
pub fn encode(data: &[u8], compression: Compression) -> std::io::Result<String> {
    let mut gz = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), compression.level());
    gz.write_all(data)?;
    let compressed = gz.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Inverse of [`encode`].
///
/// A record declaring zero bytes decodes to nothing without looking at the
/// payload. Whitespace in the payload is ignored.
pub fn decode(payload: &str, size: u64) -> Result<Vec<u8>, DecodeError> {
    if size == 0 {
        return Ok(Vec::new());
    }

    let compact: Vec<u8> = payload
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = STANDARD.decode(compact)?;

    // Declared size is only a hint; a corrupt record may claim anything
    let hint = usize::try_from(size).map_or(0, |size| size.min(compressed.len().saturating_mul(16)));
    let mut data = Vec::with_capacity(hint);
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut data)
        .map_err(DecodeError::Inflate)?;

    if data.len() as u64 != size {
        return Err(DecodeError::SizeMismatch {
            declared: size,
            actual: data.len() as u64,
        });
    }

    Ok(data)
}

/// Split base64 text into lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<&str> {
    debug_assert!(text.is_ascii());
    let width = width.max(1);
    let mut lines = Vec::with_capacity(text.len() / width + 1);
    let mut start = 0;
    while start < text.len() {
        let end = (start + width).min(text.len());
        lines.push(&text[start..end]);
        start = end;
    }
    lines
}
