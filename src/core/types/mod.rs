//! Core type definitions for the marshalling engine
//!
//! Address and word representation, the request kinds issued against the
//! tracee, the bit-copyable capability gate, and the failure record.

mod address;
mod error;
mod plain;
mod request;

// Re-export all public types
pub use address::{Address, ParseAddressError};
pub use error::{Explain, TraceError, TraceResult};
pub use plain::Plain;
pub use request::Request;

/// Process identifier of a tracee (`pid_t`). The engine never owns the
/// process or its trace session; the caller supplies an already-traced pid.
pub type Pid = i32;

/// The fixed-size unit the trace primitive reads or writes per call
pub type Word = usize;

/// Transfer granularity of the trace primitive, in bytes
pub const WORD_SIZE: usize = std::mem::size_of::<Word>();
