/// Round a value to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completed/total exchange ratio as a percentage, rounded to 2 decimals
///
/// Zero total yields 0.0 rather than a division error.
#[inline]
pub fn success_rate(completed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(completed as f64 / total as f64 * 100.0)
}

/// Average rating as reported by the store, rounded to 2 decimals
///
/// `None` (no reviews) maps to 0.0, never an error.
#[inline]
pub fn average_rating(avg: Option<f64>) -> f64 {
    avg.map(round2).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(4.0), 4.0);
    }

    #[test]
    fn test_success_rate_zero_total() {
        assert_eq!(success_rate(0, 0), 0.0);
    }

    #[test]
    fn test_success_rate_rounding() {
        assert_eq!(success_rate(1, 3), 33.33);
        assert_eq!(success_rate(2, 3), 66.67);
        assert_eq!(success_rate(3, 3), 100.0);
        assert_eq!(success_rate(0, 5), 0.0);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(None), 0.0);
        assert_eq!(average_rating(Some(4.333333)), 4.33);
        assert_eq!(average_rating(Some(5.0)), 5.0);
    }
}
