/// Errors that can occur while encoding or decoding capture records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record header contains an invalid magic number.
    #[error("invalid record magic (expected 0x534D \"SM\")")]
    InvalidMagic,

    /// The record header sets flag bits this format does not define.
    #[error("invalid record flags 0x{0:02x}")]
    InvalidFlags(u8),

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing records.
    #[error("record I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended part way through a record.
    #[error("capture truncated ({buffered} bytes of an incomplete record)")]
    Truncated { buffered: usize },

    /// The sink stopped accepting bytes.
    #[error("writer closed")]
    WriterClosed,
}

pub type Result<T> = std::result::Result<T, RecordError>;
