//! Trace request kinds consumed by the marshalling engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two data-transfer requests the engine issues against the tracee.
///
/// Session-lifecycle requests (attach, detach, continue, signal delivery)
/// are the caller's responsibility and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Request {
    /// Read one machine word from the tracee's data area
    PeekData,
    /// Write one machine word into the tracee's data area
    PokeData,
}

impl Request {
    /// Returns the raw `ptrace(2)` request constant
    #[cfg(target_os = "linux")]
    pub fn raw(&self) -> libc::c_uint {
        match self {
            Request::PeekData => libc::PTRACE_PEEKDATA,
            Request::PokeData => libc::PTRACE_POKEDATA,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::PeekData => write!(f, "PTRACE_PEEKDATA"),
            Request::PokeData => write!(f, "PTRACE_POKEDATA"),
        }
    }
}
