//! Traced process handle
//!
//! A non-owning wrapper around the tracee's pid. Attaching, stopping, and
//! detaching are the caller's responsibility.

mod handle;

pub use handle::TracedProcess;
