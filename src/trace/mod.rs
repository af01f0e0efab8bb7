//! Trace primitive layer: errno-disciplined `ptrace(2)` wrappers and the
//! default diagnostic explainer.
//!
//! Only the two data-transfer requests are wrapped here. Session lifecycle
//! (attach, detach, continue) belongs to the caller.

pub mod explain;
#[cfg(target_os = "linux")]
pub mod sys;

pub use explain::ErrnoExplainer;
