use std::path::PathBuf;

use crate::error::{Result, RfmError};

/// 솔버 한 번 실행의 하이퍼파라미터
///
/// `main`에서는 명령행으로, 테스트에서는 직접 만듭니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// 은닉층 너비 (기저 함수 개수)
    pub num_basis: usize,
    /// `W`, `b`를 뽑는 균등분포 `[-scale, scale)`의 반폭
    pub scale: f64,
    pub seed: u64,
    pub save_dir: PathBuf,
    /// 단위 정사각형 내부 보간점 개수
    pub num_interior: usize,
    /// 경계 그룹 수. 그룹마다 각 변에 점 하나씩
    pub num_boundary: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_basis: 1000,
            scale: 0.5,
            seed: 2024,
            save_dir: PathBuf::from("checkpoint/Poisson-PS"),
            num_interior: 1000,
            num_boundary: 100,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_basis == 0 {
            return Err(RfmError::InvalidConfig("num_basis must be at least 1".into()));
        }
        if self.num_interior == 0 {
            return Err(RfmError::InvalidConfig("num_interior must be at least 1".into()));
        }
        if self.num_boundary == 0 {
            return Err(RfmError::InvalidConfig("num_boundary must be at least 1".into()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RfmError::InvalidConfig(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// `{num_basis}basis_scale{scale}_seed{seed}`, 두 산출물 이름에 공통
    fn run_tag(&self) -> String {
        // `{:?}`는 정수값 실수의 `.0`을 유지 (1 이 아니라 1.0)
        format!("{}basis_scale{:?}_seed{}", self.num_basis, self.scale, self.seed)
    }

    pub fn model_file_name(&self) -> String {
        format!("model_{}.safetensors", self.run_tag())
    }

    pub fn coefficients_file_name(&self) -> String {
        format!("C_{}.npy", self.run_tag())
    }

    pub fn model_path(&self) -> PathBuf {
        self.save_dir.join(self.model_file_name())
    }

    pub fn coefficients_path(&self) -> PathBuf {
        self.save_dir.join(self.coefficients_file_name())
    }
}
