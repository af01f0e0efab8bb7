//! Word-granularity memory marshalling engine
//!
//! This module decomposes arbitrary byte ranges into whole-word transfers
//! against a [`WordTransfer`] port, handling trailing partial words with a
//! read-modify-write splice so bytes outside the caller's footprint are
//! never clobbered. It provides:
//! - typed scalar reads and writes of any [`Plain`](crate::core::types::Plain) value
//! - bulk reads and writes over contiguous runs of values
//! - a streaming writer for sequences of unknown length
//! - `unsafe` escape hatches for values that are not provably bit-copyable

pub mod copy;
pub mod reader;
pub mod stream;
pub mod writer;

#[cfg(test)]
pub(crate) mod testutil;

pub use copy::AccessMode;
pub use reader::MemoryReader;
pub use stream::StreamWriter;
pub use writer::MemoryWriter;

use crate::core::types::{Address, TraceResult, Word};

/// One-word-at-a-time transfer port into a traced process.
///
/// The engine is built entirely on this seam.
/// [`TracedProcess`](crate::process::TracedProcess) implements it over
/// `ptrace(2)`; tests substitute an in-memory implementation. Implementations perform exactly
/// one word transfer per call and surface failures as
/// [`TraceError`](crate::core::types::TraceError) without retrying.
pub trait WordTransfer {
    /// Reads the machine word at `address`
    fn read_word(&self, address: Address) -> TraceResult<Word>;

    /// Writes one machine word at `address`
    fn write_word(&self, address: Address, word: Word) -> TraceResult<()>;
}
