use thiserror::Error;

/// Failure to turn an embedded payload back into file contents.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload failed to decompress: {0}")]
    Inflate(#[source] std::io::Error),

    #[error("decoded {actual} bytes, record declares {declared}")]
    SizeMismatch { declared: u64, actual: u64 },
}
