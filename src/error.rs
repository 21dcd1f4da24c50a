use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("stream ended before the end-of-stream code")]
    UnexpectedEof,

    #[error("codeword {0} has no assigned entry")]
    CodewordOutOfRange(u32),

    #[error("invalid codeword widths (min {min}, max {max})")]
    InvalidWidths { min: u32, max: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
