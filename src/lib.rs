//! Supervised-learning parameter estimators over named feature tables.
//!
//! The crate centers on one batch gradient-descent solver shared by the
//! linear and logistic estimators; mean normalization and the closed-form
//! normal-equations solver round out the set.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod gradient_descent;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;
pub mod table;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use error::{Error, Result};
pub use gradient_descent::GradientDescent;
pub use linear_model::{LinearRegression, LogisticParams, LogisticRegression, NormalEquations};
pub use preprocessing::mean_normalize;
pub use table::FeatureTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
