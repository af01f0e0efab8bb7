//! Typed, word-granularity memory marshalling for ptrace-traced processes.
//!
//! The underlying `ptrace(2)` data requests move exactly one machine word
//! per call. This crate decomposes reads and writes of arbitrary-sized,
//! arbitrarily-aligned objects into whole-word transfers, preserves the
//! resident bytes around partial-word footprints with read-modify-write
//! splices, and recomposes fetched words into typed values.
//!
//! The caller owns the trace session: the tracee must already be attached
//! and ptrace-stopped before any transfer is issued.
//!
//! ```no_run
//! use ptrace_marshal::{Address, TracedProcess};
//!
//! # fn main() -> Result<(), ptrace_marshal::TraceError> {
//! let tracee = TracedProcess::new(4321);
//! let addr = Address::new(0x7FFF_0000_1000);
//!
//! tracee.writer().write(addr, 0xDEAD_BEEFu32)?;
//! let value: u32 = tracee.reader().read(addr)?;
//! assert_eq!(value, 0xDEAD_BEEF);
//!
//! // Streaming write of a sequence with unknown length.
//! tracee.writer().write_iter(addr, (0..100u32).map(|i| i * 3))?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod memory;
pub mod process;
pub mod trace;

// Re-export main types from the core module
pub use crate::core::types::{
    Address, Explain, ParseAddressError, Pid, Plain, Request, TraceError, TraceResult, Word,
    WORD_SIZE,
};

pub use crate::memory::{AccessMode, MemoryReader, MemoryWriter, StreamWriter, WordTransfer};
pub use crate::process::TracedProcess;
pub use crate::trace::ErrnoExplainer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
        assert_eq!(WORD_SIZE, std::mem::size_of::<usize>());
    }

    #[test]
    fn test_address_reexport() {
        let addr = Address::new(0x1000);
        assert_eq!(addr.as_usize(), 0x1000);
        assert!(Address::null().is_null());
    }

    #[test]
    fn test_request_reexport() {
        assert_ne!(Request::PeekData, Request::PokeData);
    }

    #[test]
    fn test_error_reexport() {
        let err = TraceError::new(Request::PeekData, 1, Address::null(), None, libc::EPERM);
        assert!(err.to_string().contains("PTRACE_PEEKDATA"));

        let result: TraceResult<u32> = Err(err);
        assert!(result.is_err());
    }

    #[test]
    fn test_traced_process_reexport() {
        let process = TracedProcess::new(77);
        assert_eq!(process.pid(), 77);
    }
}
