use ndarray::Array1;

/// Integer sequence `[start, stop)` with unit step; empty when `stop <= start`.
pub fn arange(start: i64, stop: i64) -> Array1<i64> {
    Array1::from_iter(start..stop)
}
