use crate::error::{Error, Result};
use crate::gradient_descent::GradientDescent;
use crate::table::FeatureTable;
use crate::Vector;

use super::{check_fit_inputs, check_predict_inputs, with_bias_column};

/// Fitted logistic parameters.
///
/// Binary and multiclass fits return different shapes: a single parameter
/// vector for a {0,1} target, and one `(label, params)` pair per class for
/// one-vs-rest. The pairs keep the order in which each label first appears
/// in the target, so the output is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub enum LogisticParams {
    Binary(Vector),
    OneVsRest(Vec<(f64, Vector)>),
}

/// Logistic regression fitted by batch gradient descent.
///
/// With `multiclass(false)` (the default) the target must contain only 0 and
/// 1 and a single discriminator is trained. With `multiclass(true)` one
/// discriminator is trained per distinct label, each against the rest.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    pub params: Option<LogisticParams>,
    multiclass: bool,
    solver: GradientDescent,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            params: None,
            multiclass: false,
            solver: GradientDescent::new(),
        }
    }

    pub fn multiclass(mut self, multiclass: bool) -> Self {
        self.multiclass = multiclass;
        self
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
        if self.multiclass {
            let mut per_class = Vec::new();
            for class in discover_classes(y) {
                let indicator = y.mapv(|label| if label == class { 1.0 } else { 0.0 });
                let params = self.solver.solve(&x, &indicator, Self::sigmoid)?;
                per_class.push((class, params));
            }
            self.params = Some(LogisticParams::OneVsRest(per_class));
        } else {
            validate_binary_labels(y)?;
            let params = self.solver.solve(&x, y, Self::sigmoid)?;
            self.params = Some(LogisticParams::Binary(params));
        }
        Ok(())
    }

    /// Predicted probability of the positive class. Binary models only.
    pub fn predict_proba(&self, table: &FeatureTable) -> Result<Vector> {
        match self.params.as_ref().ok_or(Error::NotFitted)? {
            LogisticParams::Binary(params) => {
                check_predict_inputs(table, params)?;
                let x = with_bias_column(&table.design_matrix());
                Ok(x.dot(params).mapv(Self::sigmoid))
            }
            LogisticParams::OneVsRest(_) => Err(Error::NotBinary),
        }
    }

    /// Predicted labels: 0/1 thresholded at 0.5 for a binary model, the
    /// highest-scoring class label for a one-vs-rest model (ties go to the
    /// earlier-discovered class).
    pub fn predict(&self, table: &FeatureTable) -> Result<Vector> {
        match self.params.as_ref().ok_or(Error::NotFitted)? {
            LogisticParams::Binary(_) => {
                let probabilities = self.predict_proba(table)?;
                Ok(probabilities.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
            }
            LogisticParams::OneVsRest(per_class) => {
                let (first_label, first_params) =
                    per_class.first().ok_or(Error::NotFitted)?;
                check_predict_inputs(table, first_params)?;

                let x = with_bias_column(&table.design_matrix());
                let mut best_labels = Vector::from_elem(x.nrows(), *first_label);
                let mut best_scores = x.dot(first_params).mapv(Self::sigmoid);
                for (label, params) in &per_class[1..] {
                    let scores = x.dot(params).mapv(Self::sigmoid);
                    for (row, &score) in scores.iter().enumerate() {
                        if score > best_scores[row] {
                            best_scores[row] = score;
                            best_labels[row] = *label;
                        }
                    }
                }
                Ok(best_labels)
            }
        }
    }

    /// Fraction of correctly predicted labels.
    pub fn score(&self, table: &FeatureTable, y: &Vector) -> Result<f64> {
        let predictions = self.predict(table)?;
        crate::metrics::accuracy(y, &predictions)
    }

    fn sigmoid(z: f64) -> f64 {
        if z > 500.0 {
            1.0
        } else if z < -500.0 {
            0.0
        } else {
            1.0 / (1.0 + (-z).exp())
        }
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct labels in order of first appearance.
fn discover_classes(y: &Vector) -> Vec<f64> {
    let mut classes: Vec<f64> = Vec::new();
    for &label in y.iter() {
        if !classes.iter().any(|&c| c == label) {
            classes.push(label);
        }
    }
    classes
}

fn validate_binary_labels(y: &Vector) -> Result<()> {
    for &label in y.iter() {
        if label != 0.0 && label != 1.0 {
            return Err(Error::InvalidLabel(label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn binary_data() -> (FeatureTable, Vector) {
        let table =
            FeatureTable::from_columns(vec![("x", vec![1.0, 2.0, 3.0, 4.0])]).unwrap();
        let y = array![0.0, 0.0, 1.0, 1.0];
        (table, y)
    }

    // On separable data the gradient decays slowly near the optimum, so
    // tests trade a coarser tolerance or a larger cap for determinism.
    fn binary_model() -> LogisticRegression {
        LogisticRegression::new()
            .tolerance(1e-4)
            .max_iterations(5_000_000)
    }

    fn multiclass_model() -> LogisticRegression {
        LogisticRegression::new()
            .multiclass(true)
            .tolerance(1e-3)
            .max_iterations(2_000_000)
    }

    // Three classes in clearly separated regions of the plane: near the
    // origin, high x1, and high x2.
    fn three_class_data() -> (FeatureTable, Vector) {
        let table = FeatureTable::from_columns(vec![
            ("x1", vec![0.0, 1.0, 5.0, 6.0, 0.0, 1.0]),
            ("x2", vec![0.0, 1.0, 0.0, 1.0, 5.0, 6.0]),
        ])
        .unwrap();
        let y = array![0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        (table, y)
    }

    #[test]
    fn test_binary_returns_single_vector() {
        let (table, y) = binary_data();

        let mut model = binary_model();
        model.fit(&table, &y).unwrap();

        match model.params.as_ref().unwrap() {
            LogisticParams::Binary(params) => assert_eq!(params.len(), 2),
            LogisticParams::OneVsRest(_) => panic!("binary fit must not return a mapping"),
        }
    }

    #[test]
    fn test_binary_predictions() {
        let (table, y) = binary_data();

        let mut model = binary_model();
        model.fit(&table, &y).unwrap();

        let probabilities = model.predict_proba(&table).unwrap();
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[3] > 0.5);

        let predictions = model.predict(&table).unwrap();
        assert_eq!(predictions[0], 0.0);
        assert_eq!(predictions[3], 1.0);

        assert!(model.score(&table, &y).unwrap() > 0.5);
    }

    #[test]
    fn test_binary_rejects_other_labels() {
        let table = FeatureTable::from_columns(vec![("x", vec![1.0, 2.0])]).unwrap();
        let y = array![0.0, 2.0];

        let mut model = LogisticRegression::new();
        assert_eq!(model.fit(&table, &y).unwrap_err(), Error::InvalidLabel(2.0));
    }

    #[test]
    fn test_multiclass_mapping_shape_and_order() {
        let (table, y) = three_class_data();

        let mut model = multiclass_model();
        model.fit(&table, &y).unwrap();

        match model.params.as_ref().unwrap() {
            LogisticParams::OneVsRest(per_class) => {
                let labels: Vec<f64> = per_class.iter().map(|(label, _)| *label).collect();
                assert_eq!(labels, vec![0.0, 1.0, 2.0]);
                for (_, params) in per_class {
                    assert_eq!(params.len(), 3);
                }
            }
            LogisticParams::Binary(_) => panic!("multiclass fit must return a mapping"),
        }
    }

    #[test]
    fn test_multiclass_label_order_follows_first_appearance() {
        let table =
            FeatureTable::from_columns(vec![("x", vec![1.0, 2.0, 3.0, 4.0])]).unwrap();
        let y = array![7.0, 3.0, 7.0, 5.0];

        let mut model = multiclass_model();
        model.fit(&table, &y).unwrap();

        match model.params.as_ref().unwrap() {
            LogisticParams::OneVsRest(per_class) => {
                let labels: Vec<f64> = per_class.iter().map(|(label, _)| *label).collect();
                assert_eq!(labels, vec![7.0, 3.0, 5.0]);
            }
            LogisticParams::Binary(_) => panic!("multiclass fit must return a mapping"),
        }
    }

    #[test]
    fn test_multiclass_predictions() {
        let (table, y) = three_class_data();

        let mut model = multiclass_model();
        model.fit(&table, &y).unwrap();

        let predictions = model.predict(&table).unwrap();
        for (pred, actual) in predictions.iter().zip(y.iter()) {
            assert_eq!(pred, actual);
        }
        assert_eq!(model.score(&table, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_fit_leaves_table_unchanged() {
        let (table, y) = three_class_data();
        let names_before = table.names().to_vec();

        let mut model = multiclass_model();
        model.fit(&table, &y).unwrap();

        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.names(), names_before.as_slice());
    }

    #[test]
    fn test_predict_proba_rejected_for_multiclass() {
        let (table, y) = three_class_data();

        let mut model = multiclass_model();
        model.fit(&table, &y).unwrap();

        assert_eq!(model.predict_proba(&table).unwrap_err(), Error::NotBinary);
    }

    #[test]
    fn test_predict_without_fit() {
        let (table, _) = binary_data();
        let model = LogisticRegression::new();
        assert_eq!(model.predict(&table).unwrap_err(), Error::NotFitted);
        assert_eq!(model.predict_proba(&table).unwrap_err(), Error::NotFitted);
    }

    #[test]
    fn test_sigmoid() {
        assert!((LogisticRegression::sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(LogisticRegression::sigmoid(1000.0) > 0.99);
        assert!(LogisticRegression::sigmoid(-1000.0) < 0.01);
    }
}
