//! Errors reported by [`OrderedTree`][crate::OrderedTree].

use thiserror::Error;

/// Why a tree operation did not happen.
///
/// Payloads can't be null in Rust so there is no "invalid argument" case.
/// Node allocation goes through the global allocator which aborts the process
/// when memory runs out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// No stored value compared equal to the requested key.
    #[error("key not found in tree")]
    NotFound,
}
