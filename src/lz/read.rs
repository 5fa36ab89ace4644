use std::io::{self, Read};
use byteorder::{BigEndian, ReadBytesExt};
use crate::DecodeError;

/// Sequential view over a compressed stream. The underlying tool reads ROM
/// data big-endian, so multi-byte fields come out the same way here.
pub struct StreamReader<R: Read> {
    reader: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(reader: R) -> StreamReader<R> {
        StreamReader { reader }
    }

    /// Declared decompressed length from the 2-byte header.
    pub fn read_length(&mut self) -> Result<usize, DecodeError> {
        Ok(self.reader.read_u16::<BigEndian>().map_err(truncation)? as usize)
    }

    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        self.reader.read_u8().map_err(truncation)
    }

    pub fn read_pair(&mut self) -> Result<[u8; 2], DecodeError> {
        let mut pair = [0u8; 2];
        self.reader.read_exact(&mut pair).map_err(truncation)?;
        Ok(pair)
    }
}

fn truncation(error: io::Error) -> DecodeError {
    match error.kind() {
        io::ErrorKind::UnexpectedEof => DecodeError::UnexpectedEndOfInput,
        _ => DecodeError::IO(error),
    }
}
