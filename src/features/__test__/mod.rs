use crate::error::RfmError;
use crate::features::{FeatureMap, DIM};
use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;


fn seeded_map(n: usize, scale: f64, seed: u64) -> FeatureMap {
    FeatureMap::new(n, scale, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn test_parameter_shapes_and_range() {
    let map = seeded_map(64, 0.5, 2024);
    assert_eq!(map.num_basis(), 64);
    assert_eq!(map.weight().dim(), (64, DIM));
    assert_eq!(map.bias().len(), 64);
    assert!(map.weight().iter().chain(map.bias().iter()).all(|v| (-0.5..0.5).contains(v)));
}

#[test]
fn test_same_seed_same_parameters() {
    assert_eq!(seeded_map(32, 0.5, 7), seeded_map(32, 0.5, 7));
    assert_ne!(seeded_map(32, 0.5, 7), seeded_map(32, 0.5, 8));
}

#[test]
fn test_forward_matches_definition() {
    let weight = array![[1.0, 2.0], [-0.5, 0.25]];
    let bias = array![0.1, -0.3];
    let map = FeatureMap::from_parts(weight, bias).unwrap();

    let pts = array![[0.2, 0.4], [1.0, 0.0]];
    let phi = map.forward(&pts.view()).unwrap();
    assert_eq!(phi.dim(), (2, 2));
    assert_relative_eq!(phi[[0, 0]], (0.2 + 0.8 + 0.1_f64).sin(), epsilon = 1e-15);
    assert_relative_eq!(phi[[0, 1]], (-0.1 + 0.1 - 0.3_f64).sin(), epsilon = 1e-15);
    assert_relative_eq!(phi[[1, 0]], (1.0 + 0.1_f64).sin(), epsilon = 1e-15);
    assert_relative_eq!(phi[[1, 1]], (-0.5 - 0.3_f64).sin(), epsilon = 1e-15);
}

#[test]
fn test_predict_is_linear_combination() {
    let map = seeded_map(8, 0.5, 3);
    let pts = array![[0.3, 0.6], [0.9, 0.1], [0.5, 0.5]];
    let c = Array1::linspace(1.0, 2.0, 8);
    let phi = map.forward(&pts.view()).unwrap();
    let u = map.predict(&pts.view(), &c.view()).unwrap();
    for i in 0..3 {
        let expected: f64 = phi.row(i).iter().zip(c.iter()).map(|(p, c)| p * c).sum();
        assert_relative_eq!(u[i], expected, epsilon = 1e-14);
    }
}

#[test]
fn test_shape_errors() {
    assert!(matches!(
        FeatureMap::from_parts(Array2::zeros((4, 3)), Array1::zeros(4)),
        Err(RfmError::Shape { .. })
    ));
    assert!(matches!(
        FeatureMap::from_parts(Array2::zeros((4, 2)), Array1::zeros(5)),
        Err(RfmError::Shape { .. })
    ));

    let map = seeded_map(4, 0.5, 1);
    let bad_points = Array2::<f64>::zeros((3, 3));
    assert!(map.forward(&bad_points.view()).is_err());
    assert!(map.derivatives(&bad_points.view()).is_err());
    let pts = Array2::<f64>::zeros((3, 2));
    assert!(map.predict(&pts.view(), &Array1::zeros(5).view()).is_err());
}
