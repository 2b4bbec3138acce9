use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};

use crate::domain::exact::{boundary_values, INTERIOR_RHS};
use crate::error::{Result, RfmError};
use crate::features::{DerivativeTensors, FeatureMap};

/// 쌓아 올린 보간 선형계 `A·C ≈ f`
///
/// 내부 행이 먼저, 경계 행이 그 뒤에 옵니다.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    /// `[n_in + n_bc_total, num_basis]`
    pub matrix: Array2<f64>,
    /// `[n_in + n_bc_total]`
    pub rhs: Array1<f64>,
    pub interior_rows: usize,
}

impl LinearSystem {
    pub fn assemble(
        map: &FeatureMap,
        derivatives: &DerivativeTensors,
        boundary: &ArrayView2<f64>,
    ) -> Result<Self> {
        if derivatives.num_basis() != map.num_basis() {
            return Err(RfmError::Shape {
                context: "derivative tensors",
                expected: vec![derivatives.num_points(), map.num_basis()],
                actual: vec![derivatives.num_points(), derivatives.num_basis()],
            });
        }

        let interior_block = derivatives.neg_laplacian();
        let boundary_block = map.forward(boundary)?;
        let matrix = concatenate(Axis(0), &[interior_block.view(), boundary_block.view()])?;

        let interior_rhs = Array1::from_elem(derivatives.num_points(), INTERIOR_RHS);
        let boundary_rhs = boundary_values(boundary);
        let rhs = concatenate(Axis(0), &[interior_rhs.view(), boundary_rhs.view()])?;

        tracing::debug!(rows = matrix.nrows(), cols = matrix.ncols(), "assembled linear system");
        Ok(Self { matrix, rhs, interior_rows: derivatives.num_points() })
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }

    /// `A·c - f`
    pub fn residual(&self, coefficients: &Array1<f64>) -> Array1<f64> {
        self.matrix.dot(coefficients) - &self.rhs
    }
}
