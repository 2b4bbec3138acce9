//! # 최소제곱 보간 솔버
//!
//! 랜덤 특징 사상 → 도함수 → 선형계 조립 → SVD 최소제곱 → 오차 평가 순서로
//! 한 번 실행되는 파이프라인입니다. 난수는 시드로 만든 생성기 하나를
//! 명시적으로 넘겨 사용하며 전역 상태를 건드리지 않습니다.
pub mod assemble;
pub mod lstsq;
pub mod metrics;

#[cfg(test)]
mod __test__;

use std::time::{Duration, Instant};

use ndarray::Array1;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;

use crate::config::SolverConfig;
use crate::domain::exact::real_solution_at;
use crate::domain::{CollocationSet, Domain};
use crate::error::Result;
use crate::features::FeatureMap;

pub use self::assemble::LinearSystem;
pub use self::lstsq::{solve_least_squares, LstsqSolution};
pub use self::metrics::ErrorMetrics;

/// 한 번 실행의 모든 결과
#[derive(Debug, Clone)]
pub struct RfmSolution {
    pub feature_map: FeatureMap,
    pub collocation: CollocationSet,
    pub coefficients: Array1<f64>,
    /// SVD 절단 후 선형계 행렬의 유효 계수(rank)
    pub rank: usize,
    /// `‖A·C - f‖₂`
    pub residual_norm: f64,
    /// 내부점에서의 예측값
    pub predicted: Array1<f64>,
    pub metrics: ErrorMetrics,
    pub elapsed: Duration,
}

pub struct RfmSolver {
    config: SolverConfig,
    domain: Domain,
}

impl RfmSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, domain: Domain::unit() })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self) -> Result<RfmSolution> {
        let cfg = &self.config;
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let feature_map = FeatureMap::new(cfg.num_basis, cfg.scale, &mut rng);
        tracing::info!(shape = ?feature_map.weight().dim(), "initialized random feature map");

        let collocation =
            CollocationSet::sample(&self.domain, cfg.num_interior, cfg.num_boundary, &mut rng);
        let interior = collocation.interior();

        let derivatives = feature_map.derivatives(&interior)?;
        let system = LinearSystem::assemble(&feature_map, &derivatives, &collocation.boundary())?;
        drop(derivatives);
        tracing::info!(rows = system.nrows(), cols = system.ncols(), "solving least-squares system");

        let LstsqSolution { coefficients, rank, .. } =
            solve_least_squares(&system.matrix.view(), &system.rhs.view())?;
        let residual = system.residual(&coefficients);
        let residual_norm = residual.dot(&residual).sqrt();

        let predicted = feature_map.predict(&interior, &coefficients.view())?;
        let exact = real_solution_at(&interior);
        let metrics = ErrorMetrics::compute(&predicted.view(), &exact.view());
        let elapsed = start.elapsed();
        tracing::info!(
            rank,
            residual_norm,
            relative_l2 = metrics.relative_l2,
            max_error = metrics.max_error,
            "solve finished"
        );

        Ok(RfmSolution {
            feature_map,
            collocation,
            coefficients,
            rank,
            residual_norm,
            predicted,
            metrics,
            elapsed,
        })
    }
}
