use ndarray::ArrayView1;

/// 기준해 대비 예측 정확도
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetrics {
    /// `‖u_pred - u_true‖₂ / ‖u_true‖₂`
    pub relative_l2: f64,
    /// `max |u_pred - u_true|`
    pub max_error: f64,
}

impl ErrorMetrics {
    pub fn compute(predicted: &ArrayView1<f64>, exact: &ArrayView1<f64>) -> Self {
        let diff = predicted - exact;
        let err_norm = diff.dot(&diff).sqrt();
        let ref_norm = exact.dot(exact).sqrt();
        let max_error = diff.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        Self { relative_l2: err_norm / ref_norm, max_error }
    }
}
