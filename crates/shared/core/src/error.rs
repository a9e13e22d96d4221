use thiserror::Error;

/// Errors from combining analytic records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombineError {
    /// Operand is not of a type the operation accepts
    #[error("Cannot {op} {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
}

pub type CombineResult<T> = std::result::Result<T, CombineError>;
