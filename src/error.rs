//! Error types for terryphy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown rule: {0}")]
    InvalidRule(String),

    #[error("Unknown operator: {0}")]
    InvalidOperator(String),

    #[error("Type mismatch: cannot {op} {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("Unsupported operation: cannot {op} {operand}")]
    UnsupportedOperation {
        op: &'static str,
        operand: &'static str,
    },

    #[error("Matrix is singular and cannot be inverted (det = 0)")]
    SingularMatrix,
}

pub type Result<T> = std::result::Result<T, Error>;
