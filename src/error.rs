use thiserror::Error;

/// Default error type for leaf operands.
///
/// Combinators never construct or wrap these; whatever a leaf returns reaches
/// the caller unchanged. Applications with their own error type can use it
/// instead via the `E` parameter of [`Operand`](crate::Operand).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("missing context value '{0}'")]
    MissingValue(String),

    #[error("type mismatch for '{field}': expected {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("evaluation cancelled")]
    Cancelled,

    #[error("evaluation failed: {0}")]
    Failed(String),
}

impl EvalError {
    /// Shorthand for [`EvalError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        EvalError::Failed(message.into())
    }
}
