use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// A table of named feature columns, all of equal length.
///
/// Column names are unique and column order is the order of insertion; the
/// design matrix produced by [`FeatureTable::design_matrix`] follows that
/// order. Estimators never mutate a table they are given.
#[derive(Clone, Debug)]
pub struct FeatureTable {
    names: Vec<String>,
    columns: Vec<Vector>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Builds a table from `(name, values)` pairs.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self> {
        let mut table = Self::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Appends a column. The name must be unique and the length must match
    /// the rows already present.
    pub fn push_column<S: Into<String>>(&mut self, name: S, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.names.iter().any(|n| *n == name) {
            return Err(Error::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(Error::ColumnLengthMismatch {
                name,
                expected: self.n_rows(),
                actual: values.len(),
            });
        }
        self.names.push(name);
        self.columns.push(Vector::from(values));
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Vector> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Stacks the columns into an `(n_rows, n_cols)` matrix.
    pub fn design_matrix(&self) -> Matrix {
        let mut x = Matrix::zeros((self.n_rows(), self.n_cols()));
        for (j, col) in self.columns.iter().enumerate() {
            x.column_mut(j).assign(col);
        }
        x
    }
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self::new()
    }
}
