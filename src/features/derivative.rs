//! # 특징 함수의 도함수
//!
//! `z = w1·x + w2·y + b` 라 두면
//!
//! ```text
//! ∂x  φ =  w1   cos z        ∂y  φ =  w2   cos z
//! ∂xx φ = -w1²  sin z        ∂yy φ = -w2²  sin z
//! ```
//!
//! 자동미분 그래프 없이 기계 정밀도로 정확합니다.
use ndarray::{Array2, ArrayView2, Axis, Zip};

use super::FeatureMap;

/// 모든 내부점에서 모든 특징의 편도함수
///
/// 각 텐서는 `[num_points, num_basis]`이고 열 `k`는 은닉 유닛 `k`입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeTensors {
    pub dx: Array2<f64>,
    pub dy: Array2<f64>,
    pub dxx: Array2<f64>,
    pub dyy: Array2<f64>,
}

impl DerivativeTensors {
    /// `points`의 열 수가 `DIM`인지는 호출자가 보장합니다.
    pub(crate) fn compute(map: &FeatureMap, points: &ArrayView2<f64>) -> Self {
        let z = map.pre_activation(points);
        let shape = z.dim();
        let w = map.weight();
        let w1 = w.index_axis(Axis(1), 0);
        let w2 = w.index_axis(Axis(1), 1);

        let mut dx = Array2::zeros(shape);
        let mut dy = Array2::zeros(shape);
        let mut dxx = Array2::zeros(shape);
        let mut dyy = Array2::zeros(shape);

        // 행(보간점) 단위 병렬 처리: 각 행은 서로 독립
        Zip::from(dx.rows_mut())
            .and(dy.rows_mut())
            .and(dxx.rows_mut())
            .and(dyy.rows_mut())
            .and(z.rows())
            .par_for_each(|mut dx, mut dy, mut dxx, mut dyy, z| {
                for k in 0..z.len() {
                    let (s, c) = z[k].sin_cos();
                    let (a, b) = (w1[k], w2[k]);
                    dx[k] = a * c;
                    dy[k] = b * c;
                    dxx[k] = -a * a * s;
                    dyy[k] = -b * b * s;
                }
            });

        Self { dx, dy, dxx, dyy }
    }

    pub fn num_points(&self) -> usize {
        self.dxx.nrows()
    }

    pub fn num_basis(&self) -> usize {
        self.dxx.ncols()
    }

    /// 특징별 `-(∂xx + ∂yy)`, 선형계 행렬의 내부 블록
    pub fn neg_laplacian(&self) -> Array2<f64> {
        -(&self.dxx + &self.dyy)
    }
}
