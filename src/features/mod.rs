//! # 랜덤 특징 사상 (random feature map)
//!
//! 은닉층 하나짜리 사인 기저 `φ_k(x) = sin(w_k · x + b_k)` 입니다.
//! `W`, `b`는 생성 시 한 번만 균등분포에서 뽑고 이후 학습하지 않습니다.
//! 입력 좌표에 대한 1·2차 도함수는 `derivative` 모듈이 닫힌 형태로 계산합니다.
pub mod derivative;

#[cfg(test)]
mod __test__;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rayon::prelude::*;

use crate::error::{Result, RfmError};

pub use self::derivative::DerivativeTensors;

/// 공간 차원
pub const DIM: usize = 2;

/// 고정된 랜덤 사인 기저
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    /// `[num_basis, DIM]`
    weight: Array2<f64>,
    /// `[num_basis]`
    bias: Array1<f64>,
}

impl FeatureMap {
    /// `rng`로 `Uniform(-scale, scale)`에서 `W`, `b` 순서로 뽑습니다.
    ///
    /// `scale`은 양수여야 하며 `SolverConfig::validate`가 먼저 확인합니다.
    pub fn new<R: Rng + ?Sized>(num_basis: usize, scale: f64, rng: &mut R) -> Self {
        let dist = Uniform::new(-scale, scale);
        let weight = Array2::random_using((num_basis, DIM), dist, rng);
        let bias = Array1::random_using(num_basis, dist, rng);
        Self { weight, bias }
    }

    /// 저장된 파라미터로 사상을 다시 만듭니다.
    pub fn from_parts(weight: Array2<f64>, bias: Array1<f64>) -> Result<Self> {
        let (n, d) = weight.dim();
        if d != DIM {
            return Err(RfmError::Shape {
                context: "feature map weight",
                expected: vec![n, DIM],
                actual: vec![n, d],
            });
        }
        if bias.len() != n {
            return Err(RfmError::Shape {
                context: "feature map bias",
                expected: vec![n],
                actual: vec![bias.len()],
            });
        }
        Ok(Self { weight, bias })
    }

    pub fn num_basis(&self) -> usize {
        self.bias.len()
    }

    pub fn weight(&self) -> ArrayView2<'_, f64> {
        self.weight.view()
    }

    pub fn bias(&self) -> ArrayView1<'_, f64> {
        self.bias.view()
    }

    /// 활성화 전 값 `z = X·Wᵗ + b`, `[m, num_basis]`
    pub(crate) fn pre_activation(&self, points: &ArrayView2<f64>) -> Array2<f64> {
        points.dot(&self.weight.t()) + &self.bias
    }

    /// `points` 각 행의 `sin(X·Wᵗ + b)`, `[m, num_basis]`
    pub fn forward(&self, points: &ArrayView2<f64>) -> Result<Array2<f64>> {
        check_points(points, "feature map input")?;
        let mut z = self.pre_activation(points);
        z.axis_iter_mut(Axis(0))
            .into_par_iter()
            .for_each(|mut row| row.mapv_inplace(f64::sin));
        Ok(z)
    }

    /// `Φ(X)·C`, `points` 행마다 값 하나
    pub fn predict(&self, points: &ArrayView2<f64>, coefficients: &ArrayView1<f64>) -> Result<Array1<f64>> {
        if coefficients.len() != self.num_basis() {
            return Err(RfmError::Shape {
                context: "coefficient vector",
                expected: vec![self.num_basis()],
                actual: vec![coefficients.len()],
            });
        }
        Ok(self.forward(points)?.dot(coefficients))
    }

    pub fn derivatives(&self, points: &ArrayView2<f64>) -> Result<DerivativeTensors> {
        check_points(points, "derivative input")?;
        Ok(DerivativeTensors::compute(self, points))
    }
}

fn check_points(points: &ArrayView2<f64>, context: &'static str) -> Result<()> {
    if points.ncols() != DIM {
        return Err(RfmError::Shape {
            context,
            expected: vec![points.nrows(), DIM],
            actual: vec![points.nrows(), points.ncols()],
        });
    }
    Ok(())
}
