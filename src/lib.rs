//! RFM Poisson - 단위 정사각형 위 `-Δu = f`의 랜덤 특징 방법(random feature method)
//!
//! 고정된 랜덤 사인 특징층과 그 정확한 2차 도함수를 보간점에서 계산하고,
//! 출력 계수는 조밀 최소제곱 한 번으로 구합니다.

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod solver;

pub use checkpoint::{Checkpoint, SavedPaths};
pub use config::SolverConfig;
pub use domain::{CollocationSet, Domain};
pub use error::{Result, RfmError};
pub use features::{DerivativeTensors, FeatureMap};
pub use solver::{ErrorMetrics, LinearSystem, RfmSolution, RfmSolver};
