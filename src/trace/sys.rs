//! Raw `ptrace(2)` word-transfer wrappers with errno discipline
//!
//! `PTRACE_PEEKDATA` returns the fetched word directly, so a word whose
//! value happens to be `-1` is indistinguishable from the failure sentinel
//! by return value alone. Failure is therefore "returned `-1` AND errno is
//! non-zero", and errno must be cleared before every call. A `-1` return
//! with errno still zero is valid data.

use crate::core::types::{Address, Pid, Request, TraceError, TraceResult, Word};
use libc::c_void;

fn clear_errno() {
    // Safety: __errno_location returns the calling thread's errno slot.
    unsafe {
        *libc::__errno_location() = 0;
    }
}

fn errno() -> i32 {
    unsafe { *libc::__errno_location() }
}

/// Reads one machine word from the tracee's address space.
///
/// The tracee must be ptrace-stopped; establishing that state is the
/// caller's responsibility.
pub fn peek_data(pid: Pid, address: Address) -> TraceResult<Word> {
    clear_errno();
    let ret = unsafe {
        libc::ptrace(
            libc::PTRACE_PEEKDATA,
            pid,
            address.as_usize() as *mut c_void,
            std::ptr::null_mut::<c_void>(),
        )
    };
    if ret == -1 && errno() != 0 {
        return Err(TraceError::new(
            Request::PeekData,
            pid,
            address,
            None,
            errno(),
        ));
    }
    Ok(ret as Word)
}

/// Writes one machine word into the tracee's address space.
pub fn poke_data(pid: Pid, address: Address, word: Word) -> TraceResult<()> {
    clear_errno();
    let ret = unsafe {
        libc::ptrace(
            libc::PTRACE_POKEDATA,
            pid,
            address.as_usize() as *mut c_void,
            word as *mut c_void,
        )
    };
    if ret == -1 && errno() != 0 {
        return Err(TraceError::new(
            Request::PokeData,
            pid,
            address,
            Some(word),
            errno(),
        ));
    }
    Ok(())
}
