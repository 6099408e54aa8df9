quantity!(
    /// Percentage in `0.0..=100.0`, converted to a ratio only when multiplied.
    Percentage, suffix: "%", precision: 1
);

impl Percentage {
    /// Convert the percentage into `0.0..=1.0`.
    #[must_use]
    pub const fn to_ratio(self) -> f64 {
        self.0.0 / 100.0
    }

    #[must_use]
    pub fn is_within_bounds(self) -> bool {
        (0.0..=100.0).contains(&self.get())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_ratio() {
        assert_abs_diff_eq!(Percentage::new(43.0).to_ratio(), 0.43);
    }

    #[test]
    fn test_delta() {
        assert_eq!(Percentage::new(43.0) - Percentage::new(30.0), Percentage::new(13.0));
    }

    #[test]
    fn test_bounds() {
        assert!(Percentage::new(100.0).is_within_bounds());
        assert!(!Percentage::new(100.5).is_within_bounds());
        assert!(!Percentage::new(-1.0).is_within_bounds());
    }
}
