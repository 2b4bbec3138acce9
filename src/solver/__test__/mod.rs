use crate::config::SolverConfig;
use crate::domain::exact::INTERIOR_RHS;
use crate::domain::{CollocationSet, Domain};
use crate::error::RfmError;
use crate::features::FeatureMap;
use crate::solver::{LinearSystem, RfmSolver};
use approx::assert_relative_eq;
use ndarray::{s, Array1};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;

fn small_config(num_basis: usize) -> SolverConfig {
    SolverConfig { num_basis, num_interior: 200, num_boundary: 25, ..SolverConfig::default() }
}

#[test]
fn test_system_layout() {
    let mut rng = StdRng::seed_from_u64(4);
    let map = FeatureMap::new(10, 0.5, &mut rng);
    let pts = CollocationSet::sample(&Domain::unit(), 30, 5, &mut rng);
    let d = map.derivatives(&pts.interior()).unwrap();
    let sys = LinearSystem::assemble(&map, &d, &pts.boundary()).unwrap();

    assert_eq!((sys.nrows(), sys.ncols()), (30 + 20, 10));
    assert_eq!(sys.interior_rows, 30);
    assert_eq!(sys.matrix.slice(s![..30, ..]), d.neg_laplacian());
    assert_eq!(sys.matrix.slice(s![30.., ..]), map.forward(&pts.boundary()).unwrap());
    assert!(sys.rhs.slice(s![..30]).iter().all(|&v| v == INTERIOR_RHS));
    for (row, &target) in pts.boundary.rows().into_iter().zip(sys.rhs.slice(s![30..]).iter()) {
        let x = row[0];
        let expected = if x < 0.5 { x * x } else { (x - 1.0) * (x - 1.0) };
        assert_eq!(target, expected);
    }
}

#[test]
fn test_assemble_rejects_foreign_derivatives() {
    let mut rng = StdRng::seed_from_u64(4);
    let map = FeatureMap::new(10, 0.5, &mut rng);
    let other = FeatureMap::new(6, 0.5, &mut rng);
    let pts = CollocationSet::sample(&Domain::unit(), 8, 2, &mut rng);
    let d = other.derivatives(&pts.interior()).unwrap();
    assert!(matches!(
        LinearSystem::assemble(&map, &d, &pts.boundary()),
        Err(RfmError::Shape { .. })
    ));
}

#[test]
fn test_solver_rejects_invalid_config() {
    let cfg = SolverConfig { scale: 0.0, ..SolverConfig::default() };
    assert!(matches!(RfmSolver::new(cfg), Err(RfmError::InvalidConfig(_))));
}

#[test]
fn test_solve_is_deterministic() {
    let a = RfmSolver::new(small_config(40)).unwrap().solve().unwrap();
    let b = RfmSolver::new(small_config(40)).unwrap().solve().unwrap();
    assert_eq!(a.feature_map, b.feature_map);
    assert_eq!(a.collocation, b.collocation);
    assert_eq!(a.coefficients, b.coefficients);
    assert_eq!(a.metrics, b.metrics);
}

#[test]
fn test_solution_shapes_and_metrics() {
    let sol = RfmSolver::new(small_config(40)).unwrap().solve().unwrap();
    assert_eq!(sol.coefficients.len(), 40);
    assert_eq!(sol.predicted.len(), 200);
    assert_eq!(sol.collocation.boundary.nrows(), 100);
    assert!(sol.rank >= 1 && sol.rank <= 40);
    assert!(sol.metrics.relative_l2.is_finite() && sol.metrics.relative_l2 >= 0.0);
    assert!(sol.metrics.max_error.is_finite() && sol.metrics.max_error >= 0.0);
}

#[test]
fn test_least_squares_beats_zero_coefficients() {
    let cfg = small_config(40);
    let sol = RfmSolver::new(cfg).unwrap().solve().unwrap();

    // ‖A·0 - f‖ = ‖f‖ 이므로 최소해는 이보다 작거나 같다
    let n_bc = sol.collocation.boundary.nrows();
    let boundary_rhs = crate::domain::exact::boundary_values(&sol.collocation.boundary());
    let rhs_norm = (200.0 * INTERIOR_RHS * INTERIOR_RHS + boundary_rhs.dot(&boundary_rhs)).sqrt();
    assert_eq!(boundary_rhs.len(), n_bc);
    assert!(sol.residual_norm <= rhs_norm);
}

#[test]
fn test_single_basis_function_runs() {
    let sol = RfmSolver::new(small_config(1)).unwrap().solve().unwrap();
    assert_eq!(sol.coefficients.len(), 1);
    assert_eq!(sol.rank, 1);
    assert!(sol.coefficients[0].is_finite());
    assert!(sol.metrics.max_error.is_finite());
}

#[test]
fn test_predicted_matches_feature_map() {
    let sol = RfmSolver::new(small_config(20)).unwrap().solve().unwrap();
    let again: Array1<f64> = sol
        .feature_map
        .predict(&sol.collocation.interior(), &sol.coefficients.view())
        .unwrap();
    for (a, b) in sol.predicted.iter().zip(again.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-14);
    }
}
