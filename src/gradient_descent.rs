use log::debug;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Batch gradient descent over a design matrix.
///
/// The solver is shared by the linear and logistic estimators and is generic
/// over the hypothesis applied to each linear combination: identity for
/// linear regression, the logistic sigmoid for logistic regression. Any
/// target transform (such as the one-vs-rest class indicator) is applied by
/// the caller before solving.
///
/// Each iteration computes the full-batch gradient
/// `g = Xᵀ (h(X·θ) - y) / n` and updates every parameter from the same
/// pre-update vector, so the update is simultaneous rather than sequential.
/// Convergence is declared when the largest absolute per-parameter change
/// falls below `tolerance`; the deltas are not normalized by parameter or
/// feature scale.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.2,
            tolerance: 1e-5,
            max_iterations: 10_000,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        if tolerance <= 0.0 {
            panic!("tolerance must be positive, got {}", tolerance);
        }
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Runs the descent from an all-zero parameter vector.
    ///
    /// `x` is the augmented design matrix (bias column included). Returns the
    /// converged parameter vector, or an error when the inputs are malformed,
    /// the parameters stop being finite, or `max_iterations` passes without
    /// the tolerance being met.
    pub fn solve<H: Fn(f64) -> f64>(
        &self,
        x: &Matrix,
        y: &Vector,
        hypothesis: H,
    ) -> Result<Vector> {
        if x.nrows() == 0 {
            return Err(Error::EmptyTable);
        }
        if x.ncols() == 0 {
            return Err(Error::NoFeatures);
        }
        if y.len() != x.nrows() {
            return Err(Error::TargetLengthMismatch {
                target: y.len(),
                rows: x.nrows(),
            });
        }

        let mut theta = Vector::zeros(x.ncols());
        for iteration in 0..self.max_iterations {
            let next = self.step(x, y, &hypothesis, &theta);
            if next.iter().any(|v| !v.is_finite()) {
                debug!("descent diverged after {} iterations", iteration + 1);
                return Err(Error::Diverged {
                    iterations: iteration + 1,
                });
            }

            let delta = (&next - &theta).fold(0.0_f64, |acc, d| acc.max(d.abs()));
            if delta < self.tolerance {
                debug!(
                    "converged after {} iterations (max |delta| = {:.3e})",
                    iteration + 1,
                    delta
                );
                return Ok(next);
            }
            theta = next;
        }

        Err(Error::IterationLimit(self.max_iterations))
    }

    /// One simultaneous update: every component of the result is computed
    /// from the same incoming `theta`.
    fn step<H: Fn(f64) -> f64>(
        &self,
        x: &Matrix,
        y: &Vector,
        hypothesis: &H,
        theta: &Vector,
    ) -> Vector {
        let n = x.nrows() as f64;
        let predictions = x.dot(theta).mapv(|z| hypothesis(z));
        let error = &predictions - y;
        let gradient = x.t().dot(&error) / n;
        theta - &(gradient * self.learning_rate)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linear_convergence() {
        let _ = pretty_env_logger::try_init();

        // y = 2*x + 3, design matrix already carries the bias column
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![5.0, 7.0, 9.0, 11.0];

        let solver = GradientDescent::new().learning_rate(0.1).tolerance(1e-6);
        let params = solver.solve(&x, &y, |z| z).unwrap();

        assert!((params[0] - 3.0).abs() < 1e-3);
        assert!((params[1] - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_simultaneous_update_differs_from_sequential() {
        let x = array![[1.0, 2.0, -1.0], [1.0, -1.0, 3.0], [1.0, 4.0, 0.5]];
        let y = array![2.0, -1.0, 5.0];
        let theta = array![0.5, -0.25, 0.1];

        let solver = GradientDescent::new().learning_rate(0.1);
        let simultaneous = solver.step(&x, &y, &|z: f64| z, &theta);

        // Sequential variant: each gradient component sees the components
        // already updated in this pass.
        let n = x.nrows() as f64;
        let mut sequential = theta.clone();
        for i in 0..sequential.len() {
            let error = x.dot(&sequential) - &y;
            let gradient_i = x.column(i).dot(&error) / n;
            sequential[i] -= 0.1 * gradient_i;
        }

        let max_diff = (&simultaneous - &sequential).fold(0.0_f64, |acc, d| acc.max(d.abs()));
        assert!(max_diff > 1e-12);
    }

    #[test]
    fn test_divergent_learning_rate_is_detected() {
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![5.0, 7.0, 9.0, 11.0];

        let solver = GradientDescent::new().learning_rate(10.0);
        match solver.solve(&x, &y, |z| z) {
            Err(Error::Diverged { .. }) => {}
            other => panic!("expected divergence, got {:?}", other),
        }
    }

    #[test]
    fn test_iteration_limit() {
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![5.0, 7.0, 9.0, 11.0];

        let solver = GradientDescent::new()
            .learning_rate(0.001)
            .tolerance(1e-12)
            .max_iterations(5);
        assert_eq!(
            solver.solve(&x, &y, |z| z).unwrap_err(),
            Error::IterationLimit(5)
        );
    }

    #[test]
    fn test_shape_errors() {
        let solver = GradientDescent::new();

        let empty = Matrix::zeros((0, 2));
        assert_eq!(
            solver.solve(&empty, &Vector::zeros(0), |z| z).unwrap_err(),
            Error::EmptyTable
        );

        let no_features = Matrix::zeros((3, 0));
        assert_eq!(
            solver
                .solve(&no_features, &Vector::zeros(3), |z| z)
                .unwrap_err(),
            Error::NoFeatures
        );

        let x = array![[1.0, 1.0], [1.0, 2.0]];
        assert_eq!(
            solver.solve(&x, &Vector::zeros(3), |z| z).unwrap_err(),
            Error::TargetLengthMismatch { target: 3, rows: 2 }
        );
    }

    #[test]
    #[should_panic(expected = "learning_rate must be positive")]
    fn test_invalid_learning_rate_panics() {
        let _ = GradientDescent::new().learning_rate(0.0);
    }
}
