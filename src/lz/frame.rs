use std::io::{self, Write};
use byteorder::WriteBytesExt;
use crate::{GROUP_TOKENS, MIN_MATCH, WINDOW_MASK};

/// A back-reference token: an absolute window slot and a stored match
/// length in 2..=17. On the wire the length is biased by -2 into the low
/// nibble of the second byte, and the replay loop runs `length + 1` steps,
/// so a single token reproduces 3..=18 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackRef {
    pub offset: usize,
    pub length: usize,
}

impl BackRef {
    pub fn pack(&self) -> [u8; 2] {
        let low = (self.offset & 0xFF) as u8;
        let high = (((self.offset >> 4) & 0xF0) | ((self.length - MIN_MATCH) & 0xF)) as u8;
        [low, high]
    }

    pub fn unpack(pair: [u8; 2]) -> BackRef {
        BackRef {
            offset: (pair[0] as usize | ((pair[1] as usize & 0xF0) << 4)) & WINDOW_MASK,
            length: (pair[1] as usize & 0xF) + MIN_MATCH,
        }
    }

    /// Bytes reproduced when this token is replayed.
    #[inline]
    pub fn replay_len(&self) -> usize {
        self.length + 1
    }
}

/// Encoder-side accumulator for one control group: up to eight tokens and
/// the flag byte that tags them. Token `i`'s flag sits at bit `i`, so the
/// first token lands in the least-significant bit the decoder tests first.
pub struct ControlFrame {
    flags: u8,
    count: usize,
    tokens: Vec<u8>,
}

impl ControlFrame {
    pub fn new() -> ControlFrame {
        ControlFrame {
            flags: 0,
            count: 0,
            tokens: Vec::with_capacity(GROUP_TOKENS * 2),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == GROUP_TOKENS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn push_literal(&mut self, byte: u8) {
        self.flags |= 1 << self.count;
        self.count += 1;
        self.tokens.push(byte);
    }

    pub fn push_backref(&mut self, backref: &BackRef) {
        // Flag bit stays clear for a pair.
        self.count += 1;
        self.tokens.extend_from_slice(&backref.pack());
    }

    /// Write the control byte followed by the token bytes, then reset.
    pub fn flush(&mut self, writer: &mut impl Write) -> Result<(), io::Error> {
        writer.write_u8(self.flags)?;
        writer.write_all(&self.tokens)?;
        self.flags = 0;
        self.count = 0;
        self.tokens.clear();
        Ok(())
    }
}

impl Default for ControlFrame {
    fn default() -> Self {
        ControlFrame::new()
    }
}

/// Decoder-side shift register. The reloaded value carries 0xFF in the
/// high byte; once those sentinel bits have all been shifted past bit 8
/// the group is exhausted and a fresh control byte is due. No separate
/// bit counter is needed.
pub struct ControlRegister {
    bits: u32,
}

impl ControlRegister {
    pub fn new() -> ControlRegister {
        ControlRegister { bits: 0 }
    }

    #[inline]
    pub fn shift(&mut self) {
        self.bits >>= 1;
    }

    #[inline]
    pub fn exhausted(&self) -> bool {
        self.bits & 0x100 == 0
    }

    #[inline]
    pub fn reload(&mut self, control: u8) {
        self.bits = control as u32 | 0xFF00;
    }

    /// Flag for the current token: set means literal, clear means pair.
    #[inline]
    pub fn literal(&self) -> bool {
        self.bits & 1 != 0
    }
}

impl Default for ControlRegister {
    fn default() -> Self {
        ControlRegister::new()
    }
}
