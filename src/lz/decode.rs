use std::io::Read;
use log::debug;
use crate::{BackRef, ControlRegister, DecodeError, SlidingWindow, StreamReader, WINDOW_MASK};

/// Decompress a complete stream: 2-byte big-endian plaintext length, then
/// control groups until that many bytes have been produced.
pub fn decode(reader: impl Read) -> Result<Vec<u8>, DecodeError> {
    let mut stream = StreamReader::new(reader);
    let declared = stream.read_length()?;
    decode_body(stream, declared)
}

/// Decompress the token stream that follows the header, producing exactly
/// `declared` bytes.
pub fn decode_body<R: Read>(
    mut stream: StreamReader<R>,
    declared: usize,
) -> Result<Vec<u8>, DecodeError> {
    debug!("decoding a stream declaring {declared} plaintext bytes");

    let mut output = Vec::with_capacity(declared);
    let mut window = SlidingWindow::new();
    let mut register = ControlRegister::new();
    let mut remaining = declared;

    while remaining > 0 {
        register.shift();
        if register.exhausted() {
            register.reload(stream.read_byte()?);
        }

        if register.literal() {
            let byte = stream.read_byte()?;
            window.append(byte);
            output.push(byte);
            remaining -= 1;
        } else {
            let backref = BackRef::unpack(stream.read_pair()?);
            if backref.replay_len() > remaining {
                return Err(DecodeError::BackRefOverflow {
                    replay: backref.replay_len(),
                    remaining,
                });
            }

            let mut offset = backref.offset;
            for _ in 0..backref.replay_len() {
                let byte = window.get(offset);
                window.append(byte);
                output.push(byte);
                offset = (offset + 1) & WINDOW_MASK;
                remaining -= 1;
            }
        }
    }

    Ok(output)
}
