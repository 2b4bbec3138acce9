use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rfm_poisson::cli::Cli;
use rfm_poisson::{Checkpoint, RfmSolver, SolverConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rfm_poisson=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{cli:?}");

    let config = SolverConfig::from(cli);
    let solver = RfmSolver::new(config).context("invalid solver configuration")?;
    let solution = solver.solve().context("random feature solve failed")?;

    println!("The shape of input layer weights: {:?}", solution.feature_map.weight().shape());
    println!("Relative Error: {}", solution.metrics.relative_l2);
    println!("Max Error: {}", solution.metrics.max_error);
    println!("Execution time: {}s", solution.elapsed.as_secs_f64());

    Checkpoint::save(solver.config(), &solution.feature_map, &solution.coefficients.view())
        .with_context(|| format!("cannot save checkpoint to '{}'", solver.config().save_dir.display()))?;
    Ok(())
}
