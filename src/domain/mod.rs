//! # 계산 영역과 보간점 (collocation points)
//!
//! 단위 정사각형 `[0, 1]²` 위의 내부점과 경계점을 생성합니다.
//! 경계점은 기각 샘플링이 아니라 인덱스 구조로 각 변 위에 정확히 놓입니다.
pub mod exact;

use ndarray::{Array2, ArrayView2, Axis};
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::features::DIM;

/// 축 정렬 초입방체 `[lower, upper]^DIM`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub lower: f64,
    pub upper: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self::unit()
    }
}

impl Domain {
    pub const fn unit() -> Self {
        Self { lower: 0.0, upper: 1.0 }
    }

    /// 영역 안 균등분포 점 `n`개, `[n, DIM]`
    pub fn sample_interior<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        Array2::random_using((n, DIM), Uniform::new(self.lower, self.upper), rng)
    }

    /// 영역의 면 위 점 `2·DIM·groups`개
    ///
    /// 그룹 `i`는 `[i·2·DIM, (i+1)·2·DIM)` 행을 가집니다. `i·2·DIM + j` 행은
    /// 좌표 `j`를 `lower`로, `i·2·DIM + DIM + j` 행은 `upper`로 고정합니다.
    /// 나머지 좌표는 균등분포 그대로입니다.
    pub fn sample_boundary<R: Rng + ?Sized>(&self, groups: usize, rng: &mut R) -> Array2<f64> {
        let mut points =
            Array2::random_using((2 * DIM * groups, DIM), Uniform::new(self.lower, self.upper), rng);
        for i in 0..groups {
            for j in 0..DIM {
                points[[i * 2 * DIM + j, j]] = self.lower;
                points[[i * 2 * DIM + DIM + j, j]] = self.upper;
            }
        }
        points
    }

    /// `point`의 좌표 중 하나가 정확히 면 위에 있으면 참
    pub fn on_boundary(&self, point: &[f64]) -> bool {
        point.iter().any(|&v| v == self.lower || v == self.upper)
    }
}

/// 한 번 실행의 내부/경계 보간점
#[derive(Debug, Clone, PartialEq)]
pub struct CollocationSet {
    /// `[n_in, DIM]`
    pub interior: Array2<f64>,
    /// `[2·DIM·n_bc, DIM]`
    pub boundary: Array2<f64>,
}

impl CollocationSet {
    /// 같은 생성기로 내부점을 먼저, 경계점을 나중에 뽑습니다.
    pub fn sample<R: Rng + ?Sized>(
        domain: &Domain,
        num_interior: usize,
        num_boundary: usize,
        rng: &mut R,
    ) -> Self {
        let interior = domain.sample_interior(num_interior, rng);
        let boundary = domain.sample_boundary(num_boundary, rng);
        tracing::debug!(
            interior = interior.nrows(),
            boundary = boundary.nrows(),
            "sampled collocation points"
        );
        Self { interior, boundary }
    }

    pub fn interior(&self) -> ArrayView2<'_, f64> {
        self.interior.view()
    }

    pub fn boundary(&self) -> ArrayView2<'_, f64> {
        self.boundary.view()
    }

    pub fn total_rows(&self) -> usize {
        self.interior.len_of(Axis(0)) + self.boundary.len_of(Axis(0))
    }
}
