use std::path::PathBuf;

use clap::Parser;

use crate::config::SolverConfig;

/// Solve the 2-D Poisson equation with the random feature method.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rfm-poisson", version, about)]
pub struct Cli {
    /// The number of basis/feature functions
    #[arg(long, default_value_t = 1000)]
    pub num_basis: usize,

    /// The scale of the random feature layer
    #[arg(long, default_value_t = 0.5)]
    pub scale: f64,

    /// The random seed
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,

    /// The directory path to save the model
    #[arg(long, default_value = "checkpoint/Poisson-PS")]
    pub save_dir: PathBuf,

    /// The number of interior collocation points
    #[arg(long, default_value_t = 1000)]
    pub num_interior: usize,

    /// The number of boundary groups (one point per edge each)
    #[arg(long, default_value_t = 100)]
    pub num_boundary: usize,
}

impl From<Cli> for SolverConfig {
    fn from(c: Cli) -> Self {
        SolverConfig {
            num_basis: c.num_basis,
            scale: c.scale,
            seed: c.seed,
            save_dir: c.save_dir,
            num_interior: c.num_interior,
            num_boundary: c.num_boundary,
        }
    }
}
