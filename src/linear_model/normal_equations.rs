use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::table::FeatureTable;
use crate::Vector;

use super::{check_fit_inputs, check_predict_inputs, with_bias_column};

/// Closed-form least squares: `θ = (XᵀX)⁻¹ Xᵀ y`.
///
/// No iteration and no convergence parameters; the only failure mode beyond
/// malformed inputs is a singular `XᵀX`. The parameter layout matches
/// [`LinearRegression`](super::LinearRegression): bias at index 0.
#[derive(Clone, Debug)]
pub struct NormalEquations {
    pub params: Option<Vector>,
}

impl NormalEquations {
    pub fn new() -> Self {
        Self { params: None }
    }

    pub fn fit(&mut self, table: &FeatureTable, y: &Vector) -> Result<()> {
        check_fit_inputs(table, y)?;

        let x = with_bias_column(&table.design_matrix());
        let xtx = x.t().dot(&x);
        let xty = x.t().dot(y);

        let m = xtx.nrows();
        let xtx = DMatrix::from_row_iterator(m, m, xtx.iter().cloned());
        let inverse = xtx.try_inverse().ok_or(Error::SingularMatrix)?;
        let xty = DVector::from_iterator(m, xty.iter().cloned());
        let params = inverse * xty;

        self.params = Some(Vector::from_iter(params.iter().cloned()));
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

impl Default for NormalEquations {
    fn default() -> Self {
        Self::new()
    }
}
