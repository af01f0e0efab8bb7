//! Typed scalar and bulk writes into a traced process

use super::copy::{self, AccessMode};
use super::stream::StreamWriter;
use super::WordTransfer;
use crate::core::types::{Address, Plain, TraceResult, Word, WORD_SIZE};
use std::mem;
use std::slice;
use tracing::trace;

/// Typed writer over a traced process's memory.
///
/// Writes are decomposed into word-sized pokes at ascending addresses. A
/// footprint that does not end on a word boundary is completed by splicing
/// the caller's trailing bytes over the word currently resident there, so
/// bytes beyond the footprint survive unchanged. There is no rollback: a
/// failure mid-sequence leaves earlier words written.
pub struct MemoryWriter<'a, P> {
    port: &'a P,
    mode: AccessMode,
}

impl<'a, P> MemoryWriter<'a, P> {
    /// Creates a writer with direct local copies
    pub fn new(port: &'a P) -> Self {
        Self::with_mode(port, AccessMode::Direct)
    }

    /// Creates a writer with an explicit local copy mode
    pub fn with_mode(port: &'a P, mode: AccessMode) -> Self {
        MemoryWriter { port, mode }
    }

    /// The local copy mode in effect
    pub fn mode(&self) -> AccessMode {
        self.mode
    }
}

impl<'a, P: WordTransfer> MemoryWriter<'a, P> {
    /// Writes a raw byte range starting at `address`.
    ///
    /// The range is split into whole words plus at most one trailing
    /// partial word. The splice peek for the partial word happens before
    /// any poke, so a failed peek leaves the target range untouched.
    pub fn write_bytes(&self, address: Address, data: &[u8]) -> TraceResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let whole = data.len() / WORD_SIZE;
        let remainder = data.len() % WORD_SIZE;
        trace!(%address, len = data.len(), "writing byte range");

        let tail = if remainder != 0 {
            let tail_address = address.add_words(whole);
            let resident = self.port.read_word(tail_address)?;
            let mut bytes = resident.to_ne_bytes();
            copy::copy_slice(
                &mut bytes[..remainder],
                &data[whole * WORD_SIZE..],
                self.mode,
            );
            Some((tail_address, Word::from_ne_bytes(bytes)))
        } else {
            None
        };

        for i in 0..whole {
            let mut bytes = [0u8; WORD_SIZE];
            copy::copy_slice(&mut bytes, &data[i * WORD_SIZE..(i + 1) * WORD_SIZE], self.mode);
            self.port
                .write_word(address.add_words(i), Word::from_ne_bytes(bytes))?;
        }
        if let Some((tail_address, word)) = tail {
            self.port.write_word(tail_address, word)?;
        }
        Ok(())
    }

    /// Writes a typed value at `address`
    pub fn write<T: Plain>(&self, address: Address, value: T) -> TraceResult<()> {
        // Safety: Plain guarantees T is padding-free, so all of its bytes
        // are initialized.
        let src = unsafe {
            slice::from_raw_parts(&value as *const T as *const u8, mem::size_of::<T>())
        };
        self.write_bytes(address, src)
    }

    /// Writes a contiguous run of values starting at `address`.
    ///
    /// The run is marshalled as one flat byte range, costing exactly one
    /// remainder splice per call rather than one per element.
    pub fn write_slice<T: Plain>(&self, address: Address, values: &[T]) -> TraceResult<()> {
        // Safety: see write(); arrays of Plain values are padding-free.
        let src = unsafe {
            slice::from_raw_parts(values.as_ptr() as *const u8, mem::size_of_val(values))
        };
        self.write_bytes(address, src)
    }

    /// Writes every value produced by `values`, flushing words eagerly.
    ///
    /// For sequences of unknown length; carries at most one partial word
    /// of state between elements and performs at most one
    /// read-modify-write splice, for the final partial word. See
    /// [`StreamWriter`] for incremental use.
    pub fn write_iter<T, I>(&self, address: Address, values: I) -> TraceResult<()>
    where
        T: Plain,
        I: IntoIterator<Item = T>,
    {
        let mut stream = StreamWriter::with_mode(self.port, address, self.mode);
        for value in values {
            stream.push(value)?;
        }
        stream.finish()
    }

    /// Writes a value of any sized type from its raw byte representation.
    ///
    /// Escape hatch for types that are not provably bit-copyable.
    ///
    /// # Safety
    ///
    /// The caller asserts that shipping `value`'s raw bytes (including any
    /// padding) into the tracee is meaningful and accepts all aliasing
    /// risk. The value is not dropped differently for having been copied.
    pub unsafe fn write_unchecked<T>(&self, address: Address, value: &T) -> TraceResult<()> {
        let src = slice::from_raw_parts(value as *const T as *const u8, mem::size_of::<T>());
        self.write_bytes(address, src)
    }
}
