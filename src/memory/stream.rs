//! Streaming writes of sequences with unknown length

use super::copy::{self, AccessMode};
use super::WordTransfer;
use crate::core::types::{Address, Plain, TraceResult, Word, WORD_SIZE};
use std::mem;
use std::slice;
use tracing::trace;

/// Incremental writer that flushes whole words as bytes arrive.
///
/// Because the total length is unknown up front, the trailing splice cannot
/// be planned in advance; instead at most one partial word of pending bytes
/// is carried between pushed elements and spliced once at
/// [`finish`](Self::finish). Auxiliary storage is bounded at one word no
/// matter how long the sequence runs.
///
/// Bookkeeping invariants, held between every call:
/// - `cursor` is the target address of the next word poke;
/// - every byte before `cursor` has been committed to the tracee;
/// - `remainder[..fill]` holds the pending bytes destined for
///   `cursor..cursor+fill`, with `fill < WORD_SIZE`.
///
/// Dropping the writer without calling `finish` discards pending bytes.
pub struct StreamWriter<'a, P> {
    port: &'a P,
    cursor: Address,
    remainder: [u8; WORD_SIZE],
    fill: usize,
    mode: AccessMode,
}

impl<'a, P> StreamWriter<'a, P> {
    /// Starts a stream writing at `address`
    pub fn new(port: &'a P, address: Address) -> Self {
        Self::with_mode(port, address, AccessMode::Direct)
    }

    /// Starts a stream with an explicit local copy mode
    pub fn with_mode(port: &'a P, address: Address, mode: AccessMode) -> Self {
        StreamWriter {
            port,
            cursor: address,
            remainder: [0; WORD_SIZE],
            fill: 0,
            mode,
        }
    }

    /// Address of the next word poke
    pub fn cursor(&self) -> Address {
        self.cursor
    }

    /// Number of pending bytes not yet committed (always below one word)
    pub fn pending(&self) -> usize {
        self.fill
    }
}

impl<'a, P: WordTransfer> StreamWriter<'a, P> {
    /// Appends one typed value to the stream
    pub fn push<T: Plain>(&mut self, value: T) -> TraceResult<()> {
        // Safety: Plain guarantees T is padding-free.
        let src = unsafe {
            slice::from_raw_parts(&value as *const T as *const u8, mem::size_of::<T>())
        };
        self.push_bytes(src)
    }

    /// Appends raw bytes to the stream
    pub fn push_bytes(&mut self, mut src: &[u8]) -> TraceResult<()> {
        // Top off a pending partial word first.
        if self.fill > 0 {
            let take = (WORD_SIZE - self.fill).min(src.len());
            let (head, rest) = src.split_at(take);
            copy::copy_slice(
                &mut self.remainder[self.fill..self.fill + take],
                head,
                self.mode,
            );
            self.fill += take;
            src = rest;
            if self.fill == WORD_SIZE {
                self.port
                    .write_word(self.cursor, Word::from_ne_bytes(self.remainder))?;
                self.cursor = self.cursor.add_words(1);
                self.fill = 0;
            }
        }

        // Flush whole words straight from the element's bytes.
        while src.len() >= WORD_SIZE {
            let (head, rest) = src.split_at(WORD_SIZE);
            let mut bytes = [0u8; WORD_SIZE];
            copy::copy_slice(&mut bytes, head, self.mode);
            self.port
                .write_word(self.cursor, Word::from_ne_bytes(bytes))?;
            self.cursor = self.cursor.add_words(1);
            src = rest;
        }

        // Whatever is left is below one word. If the top-off above did not
        // empty the remainder, src was exhausted there, so fill is 0 here.
        if !src.is_empty() {
            copy::copy_slice(&mut self.remainder[..src.len()], src, self.mode);
            self.fill = src.len();
        }
        Ok(())
    }

    /// Commits any pending partial word and consumes the stream.
    ///
    /// A non-empty remainder is completed by a single read-modify-write
    /// splice against the cursor, preserving the resident bytes beyond the
    /// stream's footprint.
    pub fn finish(self) -> TraceResult<()> {
        if self.fill == 0 {
            return Ok(());
        }
        trace!(cursor = %self.cursor, pending = self.fill, "splicing final partial word");
        let resident = self.port.read_word(self.cursor)?;
        let mut bytes = resident.to_ne_bytes();
        copy::copy_slice(&mut bytes[..self.fill], &self.remainder[..self.fill], self.mode);
        self.port
            .write_word(self.cursor, Word::from_ne_bytes(bytes))
    }
}
