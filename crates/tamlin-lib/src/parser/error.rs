//! Fatal parse faults.

use thiserror::Error;

use crate::ast::AllocError;

/// Non-recoverable failure during a parse.
///
/// A fault is not a grammar mismatch: it unwinds through every level,
/// and [`Parser::choice`](super::Parser::choice) must not mask it by
/// trying another alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The arena refused an allocation.
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),

    /// A recursive rule nested past the configured limit.
    #[error("recursion limit exceeded ({limit} levels)")]
    DepthLimit { limit: u32 },
}
