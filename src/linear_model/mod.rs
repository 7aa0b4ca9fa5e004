//! Linear models for regression and classification.
//!
//! - `LinearRegression`: gradient-descent least squares
//! - `NormalEquations`: closed-form least squares
//! - `LogisticRegression`: binary and one-vs-rest multiclass classification
//!
//! All estimators learn the bias term as the weight on a constant-1 column
//! prepended to a private copy of the design matrix, so the fitted parameter
//! vector has the bias at index 0 followed by one weight per feature column
//! in table order. The caller's table is never modified.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use paramfit::{FeatureTable, LinearRegression};
//! use ndarray::array;
//!
//! let table = FeatureTable::from_columns(vec![("x", vec![1.0, 2.0, 3.0, 4.0])]).unwrap();
//! let y = array![3.0, 5.0, 7.0, 9.0];
//!
//! let mut model = LinearRegression::new().learning_rate(0.1).tolerance(1e-6);
//! model.fit(&table, &y).unwrap();
//!
//! let params = model.params.as_ref().unwrap();
//! assert!((params[0] - 1.0).abs() < 1e-3); // bias
//! assert!((params[1] - 2.0).abs() < 1e-3); // weight on x
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use paramfit::{FeatureTable, LogisticRegression};
//! use ndarray::array;
//!
//! let table = FeatureTable::from_columns(vec![("x", vec![1.0, 2.0, 3.0, 4.0])]).unwrap();
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new().tolerance(1e-3);
//! model.fit(&table, &y).unwrap();
//! let predictions = model.predict(&table).unwrap();
//! assert_eq!(predictions[0], 0.0);
//! assert_eq!(predictions[3], 1.0);
//! ```

mod linear_regression;
mod logistic_regression;
mod normal_equations;

pub use linear_regression::LinearRegression;
pub use logistic_regression::{LogisticParams, LogisticRegression};
pub use normal_equations::NormalEquations;

use crate::error::{Error, Result};
use crate::table::FeatureTable;
use crate::{Matrix, Vector};

/// Prepends a constant-1 bias column to `x`, returning a fresh matrix.
pub(crate) fn with_bias_column(x: &Matrix) -> Matrix {
    let mut augmented = Matrix::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(ndarray::s![.., 1..]).assign(x);
    augmented
}

/// Shared fit-time validation: the table must be non-degenerate and the
/// target must have one value per row.
pub(crate) fn check_fit_inputs(table: &FeatureTable, y: &Vector) -> Result<()> {
    if table.n_cols() == 0 {
        return Err(Error::NoFeatures);
    }
    if table.n_rows() == 0 {
        return Err(Error::EmptyTable);
    }
    if y.len() != table.n_rows() {
        return Err(Error::TargetLengthMismatch {
            target: y.len(),
            rows: table.n_rows(),
        });
    }
    Ok(())
}

/// Shared predict-time validation against a fitted parameter vector.
pub(crate) fn check_predict_inputs(table: &FeatureTable, params: &Vector) -> Result<()> {
    if table.n_cols() + 1 != params.len() {
        return Err(Error::FeatureCountMismatch {
            expected: params.len() - 1,
            actual: table.n_cols(),
        });
    }
    Ok(())
}
