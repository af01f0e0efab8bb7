//! Core module containing the fundamental types of the marshalling engine
//!
//! This module provides the building blocks used throughout the crate:
//! address handling, word representation, the bit-copyable value gate,
//! and the transfer failure record.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, Explain, Pid, Plain, Request, TraceError, TraceResult, Word, WORD_SIZE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
