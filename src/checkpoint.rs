//! # 체크포인트 저장/복원
//!
//! 한 번의 실행이 남기는 두 산출물입니다.
//!
//! ```text
//! {save_dir}/
//!   model_{n}basis_scale{s}_seed{seed}.safetensors   input_layers.weight [n, 2], input_layers.bias [n]
//!   C_{n}basis_scale{s}_seed{seed}.npy               coefficients [n, 1]
//! ```
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_npy::{read_npy, write_npy};
use safetensors::tensor::{Dtype, SafeTensors, TensorView};

use crate::config::SolverConfig;
use crate::error::{Result, RfmError};
use crate::features::{FeatureMap, DIM};

pub const WEIGHT_KEY: &str = "input_layers.weight";
pub const BIAS_KEY: &str = "input_layers.bias";

/// 복원된 특징 사상과 계수 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub feature_map: FeatureMap,
    pub coefficients: Array1<f64>,
}

/// `Checkpoint::save`가 기록한 두 파일의 경로
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaths {
    pub model: PathBuf,
    pub coefficients: PathBuf,
}

impl Checkpoint {
    /// 두 산출물을 `config.save_dir` 아래에 씁니다. 디렉터리가 없으면 만듭니다.
    pub fn save(
        config: &SolverConfig,
        feature_map: &FeatureMap,
        coefficients: &ArrayView1<f64>,
    ) -> Result<SavedPaths> {
        fs::create_dir_all(&config.save_dir)?;

        let model = config.model_path();
        save_feature_map(&model, feature_map, config)?;

        let coefficients_path = config.coefficients_path();
        let column = coefficients.insert_axis(Axis(1));
        write_npy(&coefficients_path, &column)?;

        tracing::info!(
            model = %model.display(),
            coefficients = %coefficients_path.display(),
            "saved checkpoint"
        );
        Ok(SavedPaths { model, coefficients: coefficients_path })
    }

    pub fn load(model_path: &Path, coefficients_path: &Path) -> Result<Self> {
        let feature_map = load_feature_map(model_path)?;

        let column: Array2<f64> = read_npy(coefficients_path)?;
        if column.dim() != (feature_map.num_basis(), 1) {
            return Err(RfmError::Shape {
                context: "stored coefficients",
                expected: vec![feature_map.num_basis(), 1],
                actual: column.shape().to_vec(),
            });
        }
        let coefficients = column.index_axis_move(Axis(1), 0);

        tracing::debug!(num_basis = feature_map.num_basis(), "loaded checkpoint");
        Ok(Self { feature_map, coefficients })
    }

    pub fn load_for(config: &SolverConfig) -> Result<Self> {
        Self::load(&config.model_path(), &config.coefficients_path())
    }

    /// `Φ(points)·C`
    pub fn predict(&self, points: &ArrayView2<f64>) -> Result<Array1<f64>> {
        self.feature_map.predict(points, &self.coefficients.view())
    }
}

fn f64_le_bytes(values: impl Iterator<Item = f64>) -> Vec<u8> {
    values.flat_map(f64::to_le_bytes).collect()
}

fn save_feature_map(path: &Path, map: &FeatureMap, config: &SolverConfig) -> Result<()> {
    let weight_bytes = f64_le_bytes(map.weight().iter().copied());
    let bias_bytes = f64_le_bytes(map.bias().iter().copied());

    let tensors = vec![
        (WEIGHT_KEY, TensorView::new(Dtype::F64, vec![map.num_basis(), DIM], &weight_bytes)?),
        (BIAS_KEY, TensorView::new(Dtype::F64, vec![map.num_basis()], &bias_bytes)?),
    ];
    let metadata = HashMap::from([
        ("scale".to_string(), format!("{:?}", config.scale)),
        ("seed".to_string(), config.seed.to_string()),
    ]);
    safetensors::serialize_to_file(tensors, &Some(metadata), path)?;
    Ok(())
}

fn load_feature_map(path: &Path) -> Result<FeatureMap> {
    let buffer = fs::read(path)?;
    let tensors = SafeTensors::deserialize(&buffer)?;

    let (weight_shape, weight) = read_f64_tensor(&tensors, WEIGHT_KEY)?;
    let (bias_shape, bias) = read_f64_tensor(&tensors, BIAS_KEY)?;

    let weight = match weight_shape.as_slice() {
        &[n, d] => Array2::from_shape_vec((n, d), weight)?,
        _ => {
            return Err(RfmError::Checkpoint {
                name: WEIGHT_KEY.into(),
                reason: format!("expected a 2-D tensor, got shape {weight_shape:?}"),
            })
        }
    };
    if bias_shape.len() != 1 {
        return Err(RfmError::Checkpoint {
            name: BIAS_KEY.into(),
            reason: format!("expected a 1-D tensor, got shape {bias_shape:?}"),
        });
    }

    FeatureMap::from_parts(weight, Array1::from(bias))
}

fn read_f64_tensor(tensors: &SafeTensors<'_>, name: &str) -> Result<(Vec<usize>, Vec<f64>)> {
    let view = tensors.tensor(name)?;
    if view.dtype() != Dtype::F64 {
        return Err(RfmError::Checkpoint {
            name: name.into(),
            reason: format!("expected F64, got {:?}", view.dtype()),
        });
    }
    let values = view
        .data()
        .chunks_exact(8)
        .map(|c| {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(c);
            f64::from_le_bytes(buf)
        })
        .collect();
    Ok((view.shape().to_vec(), values))
}
