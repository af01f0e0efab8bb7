//! Non-owning handle to a ptrace-stopped process

use crate::core::types::{Address, Pid};
use crate::memory::{AccessMode, MemoryReader, MemoryWriter, StreamWriter};
use std::fmt;

#[cfg(target_os = "linux")]
use crate::core::types::{TraceResult, Word};
#[cfg(target_os = "linux")]
use crate::memory::WordTransfer;
#[cfg(target_os = "linux")]
use crate::trace::sys;

/// Handle to a process under trace control.
///
/// The handle is a plain pid wrapper: it does not attach, keep the process
/// stopped, or detach on drop. The caller owns the trace session and must
/// have the tracee ptrace-stopped before issuing transfers, or every word
/// transfer will fail with `ESRCH`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TracedProcess {
    pid: Pid,
}

impl TracedProcess {
    /// Wraps an already-traced process id
    pub const fn new(pid: Pid) -> Self {
        TracedProcess { pid }
    }

    /// The tracee's process id
    pub const fn pid(&self) -> Pid {
        self.pid
    }

    /// A typed reader over this process's memory
    pub fn reader(&self) -> MemoryReader<'_, Self> {
        MemoryReader::new(self)
    }

    /// A typed writer over this process's memory
    pub fn writer(&self) -> MemoryWriter<'_, Self> {
        MemoryWriter::new(self)
    }

    /// A reader that performs its local byte shuffling with volatile
    /// accesses (advisory; issues the same syscalls)
    pub fn volatile_reader(&self) -> MemoryReader<'_, Self> {
        MemoryReader::with_mode(self, AccessMode::Volatile)
    }

    /// A writer that performs its local byte shuffling with volatile
    /// accesses (advisory; issues the same syscalls)
    pub fn volatile_writer(&self) -> MemoryWriter<'_, Self> {
        MemoryWriter::with_mode(self, AccessMode::Volatile)
    }

    /// A streaming writer starting at `address`
    pub fn stream(&self, address: Address) -> StreamWriter<'_, Self> {
        StreamWriter::new(self, address)
    }
}

#[cfg(target_os = "linux")]
impl WordTransfer for TracedProcess {
    fn read_word(&self, address: Address) -> TraceResult<Word> {
        sys::peek_data(self.pid, address)
    }

    fn write_word(&self, address: Address, word: Word) -> TraceResult<()> {
        sys::poke_data(self.pid, address, word)
    }
}

impl fmt::Debug for TracedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedProcess")
            .field("pid", &self.pid)
            .finish()
    }
}

impl fmt::Display for TracedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TracedProcess(pid={})", self.pid)
    }
}
