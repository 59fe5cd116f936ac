//! Error types for expression building and compilation.

use thiserror::Error;

/// Errors that can occur while building or compiling an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// The assembled text was rejected by the host pattern compiler.
    ///
    /// The message is the compiler's own, passed through unmodified.
    #[error(transparent)]
    Compile(#[from] regex::Error),

    /// A numeric group code that maps to neither a capturing (`0`) nor a
    /// non-capturing (`1`) group.
    #[error("unknown group kind: {0}")]
    UnknownGroupKind(u8),
}

/// Result type for expression operations.
pub type ExpressionResult<T> = std::result::Result<T, ExpressionError>;
