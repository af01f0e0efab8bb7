//! Typed scalar and bulk reads from a traced process

use super::copy::{self, AccessMode};
use super::WordTransfer;
use crate::core::types::{Address, Plain, TraceResult, WORD_SIZE};
use std::mem;
use std::slice;
use tracing::trace;

/// Typed reader over a traced process's memory.
///
/// Reads are decomposed into whole-word peeks starting at the caller's
/// address; any bytes fetched past the requested footprint are discarded.
/// Reads never mutate tracee memory, so no splice is needed.
pub struct MemoryReader<'a, P> {
    port: &'a P,
    mode: AccessMode,
}

impl<'a, P> MemoryReader<'a, P> {
    /// Creates a reader with direct local copies
    pub fn new(port: &'a P) -> Self {
        Self::with_mode(port, AccessMode::Direct)
    }

    /// Creates a reader with an explicit local copy mode
    pub fn with_mode(port: &'a P, mode: AccessMode) -> Self {
        MemoryReader { port, mode }
    }

    /// The local copy mode in effect
    pub fn mode(&self) -> AccessMode {
        self.mode
    }
}

impl<'a, P: WordTransfer> MemoryReader<'a, P> {
    /// Fills `out` with bytes read from `address`.
    ///
    /// Issues `ceil(out.len() / WORD_SIZE)` word peeks. On failure `out`'s
    /// contents are unspecified.
    pub fn read_into_bytes(&self, address: Address, out: &mut [u8]) -> TraceResult<()> {
        let whole = out.len() / WORD_SIZE;
        let remainder = out.len() % WORD_SIZE;
        trace!(%address, len = out.len(), "reading byte range");

        for i in 0..whole {
            let word = self.port.read_word(address.add_words(i))?;
            copy::copy_slice(
                &mut out[i * WORD_SIZE..(i + 1) * WORD_SIZE],
                &word.to_ne_bytes(),
                self.mode,
            );
        }
        if remainder != 0 {
            // The trailing peek fetches a full word; bytes past the
            // requested footprint are simply discarded.
            let word = self.port.read_word(address.add_words(whole))?;
            copy::copy_slice(
                &mut out[whole * WORD_SIZE..],
                &word.to_ne_bytes()[..remainder],
                self.mode,
            );
        }
        Ok(())
    }

    /// Reads `len` raw bytes starting at `address`
    pub fn read_bytes(&self, address: Address, len: usize) -> TraceResult<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        self.read_into_bytes(address, &mut buffer)?;
        Ok(buffer)
    }

    /// Reads a typed value from `address`.
    ///
    /// Either returns a fully populated value or an error; no partial
    /// state is observable by the caller.
    pub fn read<T: Plain>(&self, address: Address) -> TraceResult<T> {
        let mut out = T::zeroed();
        // Safety: Plain guarantees T is padding-free and valid for any
        // bit pattern, so its bytes may be written through a u8 slice.
        let dst = unsafe {
            slice::from_raw_parts_mut(&mut out as *mut T as *mut u8, mem::size_of::<T>())
        };
        self.read_into_bytes(address, dst)?;
        Ok(out)
    }

    /// Reads a contiguous run of values into `out`.
    ///
    /// The run is marshalled as one flat byte range: whole words plus at
    /// most one trailing partial word, regardless of element count. On
    /// failure `out`'s contents are unspecified.
    pub fn read_into<T: Plain>(&self, address: Address, out: &mut [T]) -> TraceResult<()> {
        let len = mem::size_of_val(out);
        // Safety: see read(); arrays of Plain values are padding-free.
        let dst = unsafe { slice::from_raw_parts_mut(out.as_mut_ptr() as *mut u8, len) };
        self.read_into_bytes(address, dst)
    }

    /// Reads `count` contiguous values starting at `address`
    pub fn read_vec<T: Plain>(&self, address: Address, count: usize) -> TraceResult<Vec<T>> {
        let mut out = vec![T::zeroed(); count];
        self.read_into(address, &mut out)?;
        Ok(out)
    }

    /// Reads a value of any sized type from its raw byte representation.
    ///
    /// Escape hatch for types that are not provably bit-copyable.
    ///
    /// # Safety
    ///
    /// The caller asserts that the bytes resident at `address` form a valid
    /// `T` and accepts all aliasing and validity risk. Invalid bytes are
    /// immediate undefined behavior.
    pub unsafe fn read_unchecked<T>(&self, address: Address) -> TraceResult<T> {
        let mut out = mem::MaybeUninit::<T>::zeroed();
        let dst = slice::from_raw_parts_mut(out.as_mut_ptr() as *mut u8, mem::size_of::<T>());
        self.read_into_bytes(address, dst)?;
        Ok(out.assume_init())
    }
}
