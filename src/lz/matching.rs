use crate::{SlidingWindow, MAX_MATCH, WINDOW_MASK, WINDOW_SIZE};

/// A repeat found in the window: how far back from the cursor it starts
/// and the length it will be stored with (2..=17, one less than the probe
/// length). Lives only for the duration of one input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub distance: usize,
    pub length: usize,
}

/// Scans the window for repeats of one target byte and picks the
/// candidate to encode.
pub struct MatchScan<'a> {
    window: &'a SlidingWindow,
    target: u8,
    lookahead: &'a [u8],
}

impl<'a> MatchScan<'a> {
    /// `lookahead` holds the input bytes following the target byte.
    pub fn new(window: &'a SlidingWindow, target: u8, lookahead: &'a [u8]) -> MatchScan<'a> {
        MatchScan {
            window,
            target,
            lookahead,
        }
    }

    /// Probe every window slot holding the target byte, most recent
    /// first, and select one candidate.
    pub fn run(&self) -> Option<MatchCandidate> {
        let possible = self.window.count(self.target);
        if possible == 0 {
            return None;
        }

        let mut candidates = Vec::new();
        let mut probed = 0;
        for distance in 0..=WINDOW_SIZE {
            if probed >= possible {
                break;
            }
            let slot = self.window.cursor().wrapping_sub(distance) & WINDOW_MASK;
            if self.window.get(slot) != self.target {
                continue;
            }
            let length = self.probe(slot);
            // The cursor slot itself is stale history, never a candidate.
            if length > 2 && distance > 0 {
                candidates.push(MatchCandidate {
                    distance,
                    length: length - 1,
                });
            }
            probed += 1;
        }

        if candidates.is_empty() {
            None
        } else {
            Some(select(&candidates))
        }
    }

    /// Extend a match starting at `slot` against the lookahead. The probe
    /// runs against a snapshot of the window that it grows itself, so an
    /// extension may match bytes the replay will only produce mid-flight;
    /// the live window is never touched. Stops at the first mismatch, at
    /// the end of the lookahead, or once the length passes 17.
    fn probe(&self, slot: usize) -> usize {
        let mut snapshot = self.window.clone();
        snapshot.append(snapshot.get(slot));
        let mut length = 1;
        while let Some(&next) = self.lookahead.get(length - 1) {
            if next != snapshot.get(slot + length) {
                break;
            }
            if length > MAX_MATCH {
                break;
            }
            snapshot.append(snapshot.get(slot + length));
            length += 1;
        }
        length
    }
}

/// Candidate selection, kept bit-compatible with the legacy tool:
/// candidates sorted by length ascending are each ranked by their sort
/// position plus the position of the first equal candidate, and the lowest
/// combined rank indexes back into the scan-order list. The merged rank
/// bottoms out at zero for the head of the length ordering, so the result
/// is always the most recently probed candidate.
fn select(candidates: &[MatchCandidate]) -> MatchCandidate {
    let mut by_length: Vec<&MatchCandidate> = candidates.iter().collect();
    by_length.sort_by_key(|candidate| candidate.length);

    let mut ranks: Vec<(usize, usize)> = by_length
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            let first = by_length
                .iter()
                .position(|other| other == candidate)
                .unwrap_or(position);
            (position + first, position)
        })
        .collect();
    ranks.sort_unstable();

    candidates[ranks[0].1]
}
