//! Default errno-based diagnostic explainer

use crate::core::types::{Explain, TraceError};

/// Explains a failed transfer by rendering the OS error text for its errno.
///
/// This is the collaborator [`TraceError::explanation`] falls back to.
/// Richer explainers (symbolizing the address, naming the mapped region)
/// can be substituted through [`TraceError::explanation_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrnoExplainer;

impl Explain for ErrnoExplainer {
    fn explain(&self, error: &TraceError) -> String {
        format!("{}: {}", error, error.os_error())
    }
}
