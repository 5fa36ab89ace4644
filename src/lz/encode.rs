use std::io::Write;
use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, trace};
use crate::{BackRef, ControlFrame, EncodeError, MatchScan, SlidingWindow, MIN_MATCH, WINDOW_MASK};

/// Compress `input` into `writer`: 2-byte big-endian plaintext length,
/// then control groups of up to eight tokens.
pub fn encode(input: &[u8], writer: &mut impl Write) -> Result<(), EncodeError> {
    if input.len() > u16::MAX as usize {
        return Err(EncodeError::InputTooLarge(input.len()));
    }
    debug!("encoding {} plaintext bytes", input.len());

    writer.write_u16::<BigEndian>(input.len() as u16)?;

    let mut window = SlidingWindow::new();
    let mut frame = ControlFrame::new();
    let mut groups_flushed = 0usize;
    let mut pos = 0;

    while pos < input.len() {
        if frame.is_full() {
            frame.flush(writer)?;
            groups_flushed += 1;
            trace!("flushed control group {groups_flushed}");
        }

        let target = input[pos];
        // Match search only runs once a full group of history exists;
        // the first eight tokens are always literals.
        let chain = if groups_flushed >= 1 {
            MatchScan::new(&window, target, &input[pos + 1..]).run()
        } else {
            None
        };

        match chain {
            Some(found) if found.length >= MIN_MATCH => {
                let offset = window.cursor().wrapping_sub(found.distance) & WINDOW_MASK;
                let backref = BackRef {
                    offset,
                    length: found.length,
                };
                frame.push_backref(&backref);
                // Advance the window exactly as the decoder will: reads
                // observe bytes appended earlier in the same replay.
                for step in 0..backref.replay_len() {
                    let byte = window.get(offset + step);
                    window.append(byte);
                }
                pos += backref.replay_len();
            }
            _ => {
                frame.push_literal(target);
                window.append(target);
                pos += 1;
            }
        }
    }

    // The trailing partial group still carries tokens; drop nothing.
    if !frame.is_empty() {
        frame.flush(writer)?;
    }
    Ok(())
}

/// Buffer-returning convenience over [`encode`].
pub fn encode_to_vec(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut output = Vec::new();
    encode(input, &mut output)?;
    Ok(output)
}
