use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("truncated input: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("invalid operation byte: 0x{0:02x}")]
    InvalidOperation(u8),

    #[error("invalid UTF-8 in change at index {index}: {source}")]
    InvalidUtf8 {
        index: usize,
        source: std::str::Utf8Error,
    },

    #[error("malformed change: {0}")]
    Malformed(String),
}

pub type WireResult<T> = Result<T, WireError>;
