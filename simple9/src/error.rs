use std::{collections::TryReserveError, io};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing to encode.
    #[error("empty input")]
    EmptyInput,

    /// A value does not fit in the 28 bit payload.
    #[error("value {value} at {index} exceeds the 28 bit limit")]
    ValueTooLarge { index: usize, value: u32 },

    /// The low 4 bits of a word name no selector.
    #[error("invalid selector {0}")]
    InvalidSelector(u32),

    /// A vbyte group does not fit in the target integer.
    #[error("vbyte overflow")]
    Overflow,

    /// The buffer ended in the middle of a vbyte.
    #[error("vbyte truncated")]
    Truncated,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to allocate output: {0}")]
    Alloc(#[from] TryReserveError),
}
