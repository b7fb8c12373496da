//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
