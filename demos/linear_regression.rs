use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use paramfit::{FeatureTable, LinearRegression, NormalEquations, mean_normalize, metrics};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Synthetic data: y = 4 + 1.5*x1 - 2*x2 plus Gaussian noise
    let n = 200;
    let mut rng = StdRng::seed_from_u64(42);
    let x1 = Array1::random_using(n, Normal::new(10.0, 3.0)?, &mut rng);
    let x2 = Array1::random_using(n, Normal::new(-2.0, 1.5)?, &mut rng);
    let noise = Array1::random_using(n, Normal::new(0.0, 0.1)?, &mut rng);
    let y = 4.0 + 1.5 * &x1 - 2.0 * &x2 + &noise;

    let table = FeatureTable::from_columns(vec![
        ("x1", x1.to_vec()),
        ("x2", x2.to_vec()),
    ])?;

    // Scaling the features lets a larger learning rate converge
    let scaled = mean_normalize(&table)?;

    let mut descent = LinearRegression::new()
        .learning_rate(0.2)
        .tolerance(1e-8)
        .max_iterations(100_000);
    descent.fit(&scaled, &y)?;
    println!("gradient descent params: {:.4}", descent.params.as_ref().unwrap());

    let mut closed_form = NormalEquations::new();
    closed_form.fit(&scaled, &y)?;
    println!("normal equations params: {:.4}", closed_form.params.as_ref().unwrap());

    let predictions = descent.predict(&scaled)?;
    println!("mse: {:.6}", metrics::mean_squared_error(&y, &predictions)?);
    println!("r2:  {:.6}", descent.score(&scaled, &y)?);

    Ok(())
}
