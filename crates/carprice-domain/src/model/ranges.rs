//! Input ranges the form widgets enforce
//!
//! The encoder trusts these and does not re-check them.

/// Inclusive numeric range for a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> FieldRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn as_inclusive(&self) -> std::ops::RangeInclusive<T> {
        self.min..=self.max
    }
}

pub const YEAR_RANGE: FieldRange<i64> = FieldRange::new(1994, 2024);
pub const KM_DRIVEN_RANGE: FieldRange<i64> = FieldRange::new(11, 200_000);
pub const MILEAGE_RANGE: FieldRange<f64> = FieldRange::new(10.0, 40.0);
pub const ENGINE_CC_RANGE: FieldRange<f64> = FieldRange::new(700.0, 5000.0);
pub const MAX_POWER_RANGE: FieldRange<f64> = FieldRange::new(0.0, 200.0);
pub const SEATS_RANGE: FieldRange<i64> = FieldRange::new(5, 10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        assert!(YEAR_RANGE.contains(1994));
        assert!(YEAR_RANGE.contains(2024));
        assert!(!YEAR_RANGE.contains(2025));
        assert!(MAX_POWER_RANGE.contains(0.0));
        assert!(!SEATS_RANGE.contains(4));
    }
}
