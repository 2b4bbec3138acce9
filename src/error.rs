use thiserror::Error;

/// 솔버 파이프라인 전체의 오류
///
/// 복구하지 않습니다. 어떤 변형이든 실행을 끝냅니다.
#[derive(Debug, Error)]
pub enum RfmError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("shape mismatch in {context}: expected {expected:?}, got {actual:?}")]
    Shape {
        context: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("least-squares solve failed: {0}")]
    Solver(String),

    #[error("checkpoint tensor `{name}` is missing or malformed: {reason}")]
    Checkpoint { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    NdShape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),

    #[error(transparent)]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    #[error(transparent)]
    SafeTensors(#[from] safetensors::SafeTensorError),
}

pub type Result<T> = std::result::Result<T, RfmError>;
