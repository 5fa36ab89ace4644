use crate::{WINDOW_MASK, WINDOW_SIZE, WINDOW_START};

/// Circular history buffer shared by both directions of the codec.
///
/// The zero fill and the 0xFEE starting cursor are part of the wire
/// contract: encoder and decoder must begin from the same state or the
/// replayed back-references diverge.
#[derive(Clone)]
pub struct SlidingWindow {
    slots: [u8; WINDOW_SIZE],
    cursor: usize,
}

impl SlidingWindow {
    pub fn new() -> SlidingWindow {
        SlidingWindow {
            slots: [0; WINDOW_SIZE],
            cursor: WINDOW_START,
        }
    }

    /// Slot that receives the next `append`.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.slots[index & WINDOW_MASK]
    }

    #[inline]
    pub fn append(&mut self, value: u8) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) & WINDOW_MASK;
    }

    /// Occurrences of `value` across the whole window, counting stale
    /// history as well as live bytes.
    pub fn count(&self, value: u8) -> usize {
        self.slots.iter().filter(|&&slot| slot == value).count()
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        SlidingWindow::new()
    }
}
