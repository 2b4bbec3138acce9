//! # 특이값 분해(SVD) 기반 최소제곱
//!
//! `ε · σ_max` 이하의 특이값은 0으로 취급합니다.
//! `scipy.linalg.lstsq`의 기본값(`cond = ε`)과 같은 기준입니다.
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{Result, RfmError};

/// 최소제곱 풀이 결과
#[derive(Debug, Clone)]
pub struct LstsqSolution {
    pub coefficients: Array1<f64>,
    /// 절단값보다 큰 특이값의 개수
    pub rank: usize,
    pub cutoff: f64,
}

/// `‖A·β − f‖₂`를 최소화하는 최소 노름 해 `β`를 구합니다.
pub fn solve_least_squares(a: &ArrayView2<f64>, f: &ArrayView1<f64>) -> Result<LstsqSolution> {
    let (m, n) = a.dim();
    if f.len() != m {
        return Err(RfmError::Shape {
            context: "least-squares right-hand side",
            expected: vec![m],
            actual: vec![f.len()],
        });
    }

    let a_mat = DMatrix::from_fn(m, n, |i, j| a[[i, j]]);
    let f_vec = DVector::from_iterator(m, f.iter().copied());

    let svd = a_mat.svd(true, true);
    let sigma_max = svd.singular_values.max();
    let cutoff = f64::EPSILON * sigma_max;
    let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();
    tracing::debug!(sigma_max, cutoff, rank, "svd factorization done");

    let beta = svd.solve(&f_vec, cutoff).map_err(|e| RfmError::Solver(e.to_string()))?;
    if !beta.iter().all(|v| v.is_finite()) {
        return Err(RfmError::Solver("solution contains non-finite values".into()));
    }

    Ok(LstsqSolution {
        coefficients: beta.iter().copied().collect(),
        rank,
        cutoff,
    })
}
