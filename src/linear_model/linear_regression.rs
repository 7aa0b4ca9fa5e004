use crate::error::{Error, Result};
use crate::gradient_descent::GradientDescent;
use crate::table::FeatureTable;
use crate::Vector;

use super::{check_fit_inputs, check_predict_inputs, with_bias_column};

/// Least-squares linear regression fitted by batch gradient descent.
///
/// After a successful `fit`, `params[0]` is the bias and `params[1..]` are
/// the weights in table column order.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub params: Option<Vector>,
    solver: GradientDescent,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            params: None,
            solver: GradientDescent::new(),
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.solver = self.solver.learning_rate(learning_rate);
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.solver = self.solver.tolerance(tolerance);
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.solver = self.solver.max_iterations(max_iterations);
        self
    }

    pub fn fit(&mut self, table: &FeatureTable, y: &Vector) -> Result<()> {
        check_fit_inputs(table, y)?;

        let x = with_bias_column(&table.design_matrix());
        self.params = Some(self.solver.solve(&x, y, |z| z)?);
        Ok(())
    }

    pub fn predict(&self, table: &FeatureTable) -> Result<Vector> {
        let params = self.params.as_ref().ok_or(Error::NotFitted)?;
        check_predict_inputs(table, params)?;

        let x = with_bias_column(&table.design_matrix());
        Ok(x.dot(params))
    }

    pub fn score(&self, table: &FeatureTable, y: &Vector) -> Result<f64> {
        let predictions = self.predict(table)?;
        crate::metrics::r2_score(y, &predictions)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
