// Copyright 2024 Karpeles Lab Inc.
// Implements the Xpress-Huffman compression format used by Microsoft
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Hash-chain match finder over the 64 KiB sliding window.

use crate::constants::{CHUNK_SIZE, MAX_CHAIN, MAX_OFFSET, MIN_MATCH, NICE_LENGTH};
use crate::error::{Error, Result};

const HASH_BITS: u32 = 15;
const HASH_SIZE: usize = 1 << HASH_BITS;
const HASH_MASK: u32 = (HASH_SIZE - 1) as u32;
const HASH_SHIFT: u32 = (HASH_BITS + 2).div_ceil(3);

const WINDOW_SIZE: usize = CHUNK_SIZE << 1;
const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Match finder state shared across the chunks of one compression call.
///
/// `table` maps the 15-bit hash of a 3-byte prefix to the most recent
/// position starting with it; `window` chains each inserted position to the
/// previous one with the same hash, indexed by `position & WINDOW_MASK`.
/// Entries older than [`MAX_OFFSET`] are rejected at lookup time, so stale
/// slots never need invalidation.
pub(crate) struct Dictionary<'a> {
    input: &'a [u8],
    /// One past the last position that still has a full 3-byte prefix
    end2: usize,
    table: Vec<u32>,
    window: Vec<u32>,
}

impl<'a> Dictionary<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self> {
        let mut table = Vec::new();
        table
            .try_reserve_exact(HASH_SIZE)
            .map_err(|_| Error::OutOfMemory)?;
        table.resize(HASH_SIZE, 0);
        let mut window = Vec::new();
        window
            .try_reserve_exact(WINDOW_SIZE)
            .map_err(|_| Error::OutOfMemory)?;
        window.resize(WINDOW_SIZE, 0);
        Ok(Dictionary {
            input,
            end2: input.len().saturating_sub(2),
            table,
            window,
        })
    }

    /// Insert every position of the chunk starting at `from` into the chains.
    ///
    /// Called once per chunk before any [`find`](Self::find); lookups inside
    /// the chunk can then reach back into the previous one. Positions are
    /// inserted only here, never during lookup.
    pub fn fill(&mut self, from: usize) {
        if from >= self.end2 {
            return;
        }
        let end = (from + CHUNK_SIZE).min(self.end2);
        for pos in from..end {
            let h = hash3(self.input[pos], self.input[pos + 1], self.input[pos + 2]) as usize;
            self.window[pos & WINDOW_MASK] = self.table[h];
            self.table[h] = pos as u32;
        }
    }

    /// Longest match for the 3-byte prefix at `pos`, or `None` when no chain
    /// candidate matches at least [`MIN_MATCH`] bytes.
    ///
    /// The offset is in `[1, MAX_OFFSET]`. The length may run past the chunk
    /// end; the caller clamps it to the chunk remainder. On equal lengths the
    /// first candidate on the chain wins.
    pub fn find(&self, pos: usize) -> Option<(usize, u32)> {
        let lower = pos.saturating_sub(MAX_OFFSET);
        let p0 = self.input[pos];
        let p1 = self.input[pos + 1];
        let mut best_len = MIN_MATCH - 1;
        let mut best_off = 0;
        let mut x = self.window[pos & WINDOW_MASK] as usize;
        let mut chain = MAX_CHAIN;
        while chain > 0 && x >= lower && x < pos {
            // the hash makes a 3-byte match likely once the prefix agrees
            if self.input[x] == p0 && self.input[x + 1] == p1 {
                let len = self.match_len(x, pos);
                if len > best_len {
                    best_off = (pos - x) as u32;
                    best_len = len;
                    if len >= NICE_LENGTH {
                        break;
                    }
                }
            }
            x = self.window[x & WINDOW_MASK] as usize;
            chain -= 1;
        }
        if best_len >= MIN_MATCH {
            Some((best_len, best_off))
        } else {
            None
        }
    }

    /// Matching byte count of the runs at `a` and `b` (`a < b`), bounded by
    /// the input end.
    fn match_len(&self, a: usize, b: usize) -> usize {
        let input = self.input;
        let limit = input.len() - b;
        let mut n = 0;
        while n < limit && input[a + n] == input[b + n] {
            n += 1;
        }
        n
    }
}

/// 15-bit hash of a 3-byte prefix: shift-xor of the bytes in order.
#[inline]
fn hash3(a: u8, b: u8, c: u8) -> u32 {
    (((a as u32) << (2 * HASH_SHIFT)) ^ ((b as u32) << HASH_SHIFT) ^ c as u32) & HASH_MASK
}
