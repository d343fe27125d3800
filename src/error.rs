use thiserror::Error;

/// Errors reported by the checked [`Iter`][crate::Iter] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterError {
    /// The iterator has already moved past the last value of its tree.
    #[error("cannot {operation} an exhausted iterator")]
    Exhausted {
        /// The operation that was attempted, e.g. `"dereference"`.
        operation: &'static str,
    },
}

/// Convenience alias for results of checked iterator operations.
pub type IterResult<T> = Result<T, IterError>;
