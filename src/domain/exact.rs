use ndarray::{Array1, ArrayView2, Axis};
use num_traits::Float;

/// 내부 행의 상수 우변. `-(∂xx + ∂yy)` 블록에 맞춰 `Δ(x²) = 2`를 `-2`로 넣습니다.
pub const INTERIOR_RHS: f64 = -2.0;

/// 기준해: 중앙선 왼쪽은 `x²`, 오른쪽은 `(x-1)²`
///
/// 내부 우변은 전 영역에서 `u = x²`를 가정하므로 이 기준해의 x 2차 도함수는
/// `x = 0.5`에서 불연속입니다. 그대로 둡니다.
pub fn real_solution<T: Float>(x: T) -> T {
    let half = T::one() / (T::one() + T::one());
    if x < half {
        x * x
    } else {
        let d = x - T::one();
        d * d
    }
}

/// `points` 각 행에서의 기준해. 첫 좌표에만 의존합니다.
pub fn real_solution_at(points: &ArrayView2<f64>) -> Array1<f64> {
    points.index_axis(Axis(1), 0).mapv(real_solution::<f64>)
}

/// 디리클레 경계값 (기준해와 동일)
pub fn boundary_values(points: &ArrayView2<f64>) -> Array1<f64> {
    real_solution_at(points)
}
