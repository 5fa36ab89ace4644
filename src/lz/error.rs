use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("LZ Decode Error: The compressed stream ended before the declared output length was reached.")]
    UnexpectedEndOfInput,
    #[error("LZ Decode Error: A back-reference replays {replay} bytes but only {remaining} remain in the declared output length.")]
    BackRefOverflow { replay: usize, remaining: usize },
    #[error(transparent)]
    IO(
        #[from] io::Error
    )
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("LZ Encode Error: Input of {0} bytes does not fit the 16-bit length header.")]
    InputTooLarge(usize),
    #[error(transparent)]
    IO(
        #[from] io::Error
    )
}
