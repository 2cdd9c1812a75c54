//! Closed-interval sets for numeric and length restrictions

use std::fmt;

/// A closed interval `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    /// Lower bound, inclusive
    pub min: T,
    /// Upper bound, inclusive
    pub max: T,
}

impl<T: PartialOrd> Interval<T> {
    /// Check if `value` lies inside the interval
    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

/// A union of closed intervals; a value is accepted when any interval holds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranges<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> Default for Ranges<T> {
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<T: Copy + PartialOrd> Ranges<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single interval
    pub fn single(min: T, max: T) -> Self {
        let mut ranges = Self::new();
        ranges.add_range(min, max);
        ranges
    }

    /// Add an interval; bounds given in reverse order are swapped
    pub fn add_range(&mut self, min: T, max: T) -> &mut Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        self.intervals.push(Interval { min, max });
        self
    }

    /// Check if any interval contains `value`
    pub fn is_within_any_range(&self, value: T) -> bool {
        self.intervals.iter().any(|i| i.contains(&value))
    }

    /// Check if no interval was added
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// YANG range syntax: `min..max|min..max`, a single value for degenerate intervals
impl<T: fmt::Display + PartialEq> fmt::Display for Ranges<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            if interval.min == interval.max {
                write!(f, "{}", interval.min)?;
            } else {
                write!(f, "{}..{}", interval.min, interval.max)?;
            }
        }
        Ok(())
    }
}
