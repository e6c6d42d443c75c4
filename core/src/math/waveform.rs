use ndarray::Array1;

/// Largest |x| whose `exp(x^2)` is still finite in double precision.
pub const MAX_ABS_SAMPLE: i64 = 26;

/// `sin(exp(x^2))` for a single abscissa sample.
#[inline]
pub fn damped_oscillation_at(x: i64) -> f64 {
    let x = x as f64;
    x.powi(2).exp().sin()
}

/// Elementwise `sin(exp(x^2))` over the whole abscissa.
pub fn damped_oscillation(x: &Array1<i64>) -> Array1<f64> {
    x.mapv(damped_oscillation_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    #[test]
    fn first_samples_match_closed_form() {
        let y = damped_oscillation(&Array1::from(vec![0, 1, 2]));
        assert!(close(y[0], 1.0_f64.sin()));
        assert!(close(y[1], E.sin()));
        assert!(close(y[2], E.powi(4).sin()));
    }

    #[test]
    fn largest_default_sample_stays_finite() {
        assert!(81.0_f64.exp().is_finite());
        assert!(damped_oscillation_at(9).is_finite());
    }

    #[test]
    fn overflowing_exponent_is_not_finite() {
        assert!(!damped_oscillation_at(30).is_finite());
    }

    #[test]
    fn max_abs_sample_is_last_finite_point() {
        assert!(damped_oscillation_at(MAX_ABS_SAMPLE).is_finite());
        assert!(damped_oscillation_at(-MAX_ABS_SAMPLE).is_finite());
        assert!(!damped_oscillation_at(MAX_ABS_SAMPLE + 1).is_finite());
    }
}
