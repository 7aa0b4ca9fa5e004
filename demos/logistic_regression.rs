use ndarray::array;
use paramfit::{FeatureTable, LogisticParams, LogisticRegression};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Binary: pass/fail against hours studied
    let hours = FeatureTable::from_columns(vec![(
        "hours",
        vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.5, 4.0, 4.5, 5.0, 5.5],
    )])?;
    let passed = array![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];

    let mut binary = LogisticRegression::new()
        .tolerance(1e-4)
        .max_iterations(1_000_000);
    binary.fit(&hours, &passed)?;
    if let Some(LogisticParams::Binary(params)) = &binary.params {
        println!("binary params (bias, weight): {:.4}", params);
    }
    println!("binary accuracy: {:.2}", binary.score(&hours, &passed)?);

    // Multiclass: three clusters in the plane, one-vs-rest
    let points = FeatureTable::from_columns(vec![
        ("x1", vec![0.0, 1.0, 0.5, 6.0, 7.0, 6.5, 0.0, 1.0, 0.5]),
        ("x2", vec![0.0, 1.0, 0.5, 0.0, 1.0, 0.5, 6.0, 7.0, 6.5]),
    ])?;
    let labels = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];

    let mut multiclass = LogisticRegression::new()
        .multiclass(true)
        .tolerance(1e-3)
        .max_iterations(1_000_000);
    multiclass.fit(&points, &labels)?;

    if let Some(LogisticParams::OneVsRest(per_class)) = &multiclass.params {
        for (label, params) in per_class {
            println!("class {label}: {:.4}", params);
        }
    }
    println!("multiclass accuracy: {:.2}", multiclass.score(&points, &labels)?);

    Ok(())
}
