pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Smallest and largest sample, or `None` for an empty slice.
    pub fn extent(samples: &[f64]) -> Option<(f64, f64)> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Axis limits with a 5% margin on each side, matching matplotlib's autoscale.
    /// A degenerate extent is widened by one unit around its value.
    pub fn padded_range(min: f64, max: f64) -> [f64; 2] {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = hi - lo;
        if span.abs() < f64::EPSILON {
            return [lo - 1.0, hi + 1.0];
        }
        let margin = span * 0.05;
        [lo - margin, hi + margin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn extent_finds_bounds() {
        assert_eq!(StatsHelper::extent(&[]), None);
        assert_eq!(StatsHelper::extent(&[0.5, -1.0, 0.25]), Some((-1.0, 0.5)));
    }

    #[test]
    fn padded_range_adds_five_percent() {
        let [lo, hi] = StatsHelper::padded_range(0.0, 9.0);
        assert!((lo + 0.45).abs() < 1e-12);
        assert!((hi - 9.45).abs() < 1e-12);
    }

    #[test]
    fn padded_range_widens_flat_data() {
        assert_eq!(StatsHelper::padded_range(2.0, 2.0), [1.0, 3.0]);
    }
}
