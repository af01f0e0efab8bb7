//! Marshalling failure type raised when a word transfer fails

use super::{Address, Pid, Request, Word};
use std::io;
use std::sync::OnceLock;
use thiserror::Error;

/// Result type alias for trace and marshalling operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Produces a human-readable explanation for a failed transfer.
///
/// Swappable diagnostic collaborator. Explanations are cosmetic: core
/// control flow never depends on whether one was computed.
pub trait Explain {
    /// Renders an explanation from the failed request's captured context.
    fn explain(&self, error: &TraceError) -> String;
}

/// A failed word transfer, captured at the point of failure.
///
/// The record is immutable and value-like: equality is defined over
/// {request, pid, address, data, errno} and ignores the lazily computed
/// explanation string. Constructing, cloning, or comparing a `TraceError`
/// never issues further syscalls.
#[derive(Debug, Clone, Error)]
#[error("{request} failed for pid {pid} at {address} (errno {errno})")]
pub struct TraceError {
    request: Request,
    pid: Pid,
    address: Address,
    data: Option<Word>,
    errno: i32,
    explanation: OnceLock<String>,
}

impl TraceError {
    /// Creates an error from an explicit error code
    pub fn new(
        request: Request,
        pid: Pid,
        address: Address,
        data: Option<Word>,
        errno: i32,
    ) -> Self {
        TraceError {
            request,
            pid,
            address,
            data,
            errno,
            explanation: OnceLock::new(),
        }
    }

    /// Creates an error capturing the calling thread's current OS error code
    pub fn last_os_error(request: Request, pid: Pid, address: Address, data: Option<Word>) -> Self {
        let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
        Self::new(request, pid, address, data, errno)
    }

    /// The request kind that failed
    pub fn request(&self) -> Request {
        self.request
    }

    /// The traced process the request targeted
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// The target address of the failing word transfer
    pub fn address(&self) -> Address {
        self.address
    }

    /// The data word involved, if the request carried one (writes only)
    pub fn data(&self) -> Option<Word> {
        self.data
    }

    /// The underlying OS error code
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// The error code as a `std::io::Error`
    pub fn os_error(&self) -> io::Error {
        io::Error::from_raw_os_error(self.errno)
    }

    /// Returns the cached human-readable explanation, computing it on first
    /// access with the default errno-based explainer.
    pub fn explanation(&self) -> &str {
        self.explanation
            .get_or_init(|| format!("{}: {}", self, self.os_error()))
    }

    /// Like [`explanation`](Self::explanation), but computes a missing
    /// explanation with the supplied collaborator instead of the default.
    pub fn explanation_with(&self, explainer: &dyn Explain) -> &str {
        self.explanation.get_or_init(|| explainer.explain(self))
    }

    /// Whether an explanation has already been computed
    pub fn has_explanation(&self) -> bool {
        self.explanation.get().is_some()
    }
}

impl PartialEq for TraceError {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request
            && self.pid == other.pid
            && self.address == other.address
            && self.data == other.data
            && self.errno == other.errno
    }
}

impl Eq for TraceError {}
