use miette::Diagnostic;
use std::fmt;

#[derive(thiserror::Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("invalid range: start {start} is greater than end {end}")]
    #[diagnostic(
        code(almanac::invalid_range),
        help("interval bounds are inclusive, a range needs at least one number")
    )]
    InvalidRange { start: i64, end: i64 },
}

/// Closed range of integers `[start, end]`.
///
/// # Invariants
/// `start <= end` always holds, so an interval covers at least one number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    // order of fields matters for the derived Ord
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds the interval covering `len` numbers starting at `start`.
    ///
    /// A zero (or negative) length yields [`IntervalError::InvalidRange`].
    pub fn from_start_len(start: i64, len: i64) -> Result<Self, IntervalError> {
        Self::new(start, start + len - 1)
    }

    /// Callers must already know that `start <= end`.
    fn new_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(start <= end, "interval [{start}, {end}] is inverted");
        Self { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered, never zero.
    pub fn size(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// True when both intervals share at least one number.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when the intervals share a number or sit right next to each other,
    /// e.g. `[3, 5]` and `[6, 8]`.
    pub fn overlaps_or_touches(&self, other: &Interval) -> bool {
        self.start <= other.end + 1 && other.start <= self.end + 1
    }

    /// Smallest interval covering both. Only meaningful when
    /// [`overlaps_or_touches`](Self::overlaps_or_touches) holds, otherwise the
    /// gap between them would be swallowed.
    pub fn merge_with(&self, other: &Interval) -> Interval {
        debug_assert!(self.overlaps_or_touches(other));
        Self::new_unchecked(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        self.intersects(other).then(|| {
            Self::new_unchecked(self.start.max(other.start), self.end.min(other.end))
        })
    }

    /// Drops every number at or below `boundary.end`.
    pub fn subtract_below(&self, boundary: &Interval) -> Option<Interval> {
        if boundary.end >= self.end {
            return None;
        }
        Some(Self::new_unchecked(
            (boundary.end + 1).max(self.start),
            self.end,
        ))
    }

    /// Drops every number at or above `boundary.start`.
    pub fn subtract_above(&self, boundary: &Interval) -> Option<Interval> {
        if boundary.start <= self.start {
            return None;
        }
        Some(Self::new_unchecked(
            self.start,
            (boundary.start - 1).min(self.end),
        ))
    }

    pub fn shifted_by(&self, delta: i64) -> Interval {
        Self::new_unchecked(self.start + delta, self.end + delta)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
