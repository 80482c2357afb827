//! Optional-aware arithmetic helpers.
//!
//! Every ratio in the toolkit is built on these four operations. Missing
//! data is carried as `None` and propagates: no formula ever substitutes a
//! silent zero or raises on absent inputs.

/// Safe division: `None` when either operand is undefined or the
/// denominator is zero.
///
/// This is the single normalization point for ratio formulas; callers never
/// divide directly. Note that `safe_divide(Some(0.0), Some(0.0))` is `None`,
/// not zero.
///
/// # Examples
///
/// ```
/// use ronda_statements::math::safe_divide;
///
/// assert_eq!(safe_divide(Some(1.0), Some(4.0)), Some(0.25));
/// assert_eq!(safe_divide(Some(1.0), Some(0.0)), None);
/// assert_eq!(safe_divide(None, Some(4.0)), None);
/// ```
#[must_use]
pub fn safe_divide(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Year-over-year growth: `(current - prior) / abs(prior)`.
///
/// `None` when either value is undefined or the prior value is zero. The
/// absolute-value denominator keeps the sign meaningful when the prior
/// value is negative.
#[must_use]
pub fn growth_rate(current: Option<f64>, prior: Option<f64>) -> Option<f64> {
    match (current, prior) {
        (Some(cur), Some(pri)) if pri != 0.0 => Some((cur - pri) / pri.abs()),
        _ => None,
    }
}

/// Asymmetric two-point average.
///
/// The arithmetic mean when both values are defined, else whichever one is
/// defined, else `None`. This is intentionally not a strict mean: averaging
/// a balance against a missing prior-year balance degenerates to the value
/// that exists, which matches the single-year edge case at the oldest year.
#[must_use]
pub fn two_point_average(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some((x + y) / 2.0),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Arithmetic mean of the defined values, `None` when none are defined.
#[must_use]
pub fn mean_of_defined<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let defined: Vec<f64> = values.into_iter().flatten().collect();
    if defined.is_empty() {
        None
    } else {
        Some(defined.iter().sum::<f64>() / defined.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_divide_zero_denominator() {
        assert_eq!(safe_divide(Some(5.0), Some(0.0)), None);
        assert_eq!(safe_divide(Some(0.0), Some(0.0)), None);
        assert_eq!(safe_divide(Some(-3.0), Some(0.0)), None);
    }

    #[test]
    fn test_safe_divide_missing_operands() {
        assert_eq!(safe_divide(None, Some(2.0)), None);
        assert_eq!(safe_divide(Some(2.0), None), None);
        assert_eq!(safe_divide(None, None), None);
    }

    #[test]
    fn test_safe_divide_basic() {
        assert_eq!(safe_divide(Some(6.0), Some(3.0)), Some(2.0));
        assert_eq!(safe_divide(Some(0.0), Some(3.0)), Some(0.0));
    }

    #[test]
    fn test_growth_rate_basic() {
        assert_eq!(growth_rate(Some(120.0), Some(100.0)), Some(0.2));
        assert_eq!(growth_rate(Some(80.0), Some(100.0)), Some(-0.2));
    }

    #[test]
    fn test_growth_rate_negative_prior() {
        // A swing from -100 to -50 is +50% off the absolute base.
        assert_eq!(growth_rate(Some(-50.0), Some(-100.0)), Some(0.5));
    }

    #[test]
    fn test_growth_rate_undefined() {
        assert_eq!(growth_rate(None, Some(100.0)), None);
        assert_eq!(growth_rate(Some(120.0), None), None);
        assert_eq!(growth_rate(Some(120.0), Some(0.0)), None);
    }

    #[test]
    fn test_two_point_average() {
        assert_eq!(two_point_average(Some(10.0), Some(20.0)), Some(15.0));
        assert_eq!(two_point_average(Some(10.0), None), Some(10.0));
        assert_eq!(two_point_average(None, Some(20.0)), Some(20.0));
        assert_eq!(two_point_average(None, None), None);
    }

    #[test]
    fn test_mean_of_defined() {
        assert_eq!(
            mean_of_defined([Some(1.0), None, Some(3.0)]),
            Some(2.0)
        );
        assert_eq!(mean_of_defined([None, None]), None);
        assert_eq!(mean_of_defined(std::iter::empty()), None);
    }
}
