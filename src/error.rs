use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by tables, preprocessing, and the solvers.
///
/// Shape errors mean the input is malformed; numeric errors mean the data or
/// the learning rate needs adjusting; `IterationLimit` means the descent ran
/// out of iterations before the tolerance was met.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("table has no rows")]
    EmptyTable,

    #[error("table has no feature columns")]
    NoFeatures,

    #[error("column '{name}' has {actual} values but the table has {expected} rows")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("a column named '{0}' already exists")]
    DuplicateColumn(String),

    #[error("target has {target} values but the table has {rows} rows")]
    TargetLengthMismatch { target: usize, rows: usize },

    #[error("expected {expected} feature columns, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("model not fitted; call fit() first")]
    NotFitted,

    #[error("column '{0}' has zero variance")]
    ZeroVariance(String),

    #[error("X^T X is singular and cannot be inverted")]
    SingularMatrix,

    #[error("gradient descent diverged after {iterations} iterations")]
    Diverged { iterations: usize },

    #[error("gradient descent did not converge within {0} iterations")]
    IterationLimit(usize),

    #[error("label {0} is not a valid binary label (expected 0 or 1)")]
    InvalidLabel(f64),

    #[error("probabilities are only available for binary models")]
    NotBinary,
}
