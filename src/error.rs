use thiserror::Error;

/// Errors arising from format-string parsing, buffer bounds checks, and the
/// typed value carrier used by [`pack`](crate::pack) and
/// [`unpack`](crate::unpack).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown format code '{code}' at position {pos}")]
    UnknownFormatCode { code: char, pos: usize },

    #[error("padding count overflow at position {pos}")]
    PaddingCountOverflow { pos: usize },

    #[error("endianness marker at position {pos} has no following directive")]
    TrailingEndian { pos: usize },

    #[error("buffer overflow at offset {pos}: need {need} bytes, have {have}")]
    BufferOverflow { need: usize, have: usize, pos: usize },

    #[error("field index {field_index} out of range (format has {field_count} field(s))")]
    IndexOutOfRange { field_index: usize, field_count: usize },

    #[error("value count mismatch: format has {expected} field(s), got {got}")]
    ValueCountMismatch { expected: usize, got: usize },

    #[error("type mismatch at field {field_index} (code '{code}'): expected {expected}")]
    TypeMismatch {
        field_index: usize,
        code: char,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
