use crate::error::{Error, Result};
use crate::table::FeatureTable;

/// Scales every column of `table` to zero mean and unit population variance.
///
/// Each value `x` becomes `(x - mean) / sqrt(population_variance)` with the
/// variance divisor being N, not N - 1. Returns a new table whose columns are
/// renamed with a `scaled_` prefix; the input table is left untouched.
pub fn mean_normalize(table: &FeatureTable) -> Result<FeatureTable> {
    if table.n_rows() == 0 {
        return Err(Error::EmptyTable);
    }

    let n = table.n_rows() as f64;
    let mut scaled = FeatureTable::new();
    for (name, column) in table.iter() {
        let mean = column.sum() / n;
        let pop_variance = column.mapv(|x| (x - mean) * (x - mean)).sum() / n;
        if pop_variance == 0.0 {
            return Err(Error::ZeroVariance(name.to_string()));
        }
        let std = pop_variance.sqrt();
        let values = column.mapv(|x| (x - mean) / std).to_vec();
        scaled.push_column(format!("scaled_{name}"), values)?;
    }
    Ok(scaled)
}
