use crate::interval::{Interval, IntervalError};
use std::ops::Index;

/// Sorted collection of disjoint, non-touching intervals.
///
/// Inserting merges the new interval with every neighbour it overlaps or
/// touches, so for any two consecutive intervals `a` and `b` it always holds
/// that `a.end() + 1 < b.start()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedIntervalSet {
    intervals: Vec<Interval>,
}

impl SortedIntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(start, length)` pairs, the way seed ranges are
    /// written in the almanac.
    pub fn from_start_lengths(
        pairs: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<Self, IntervalError> {
        pairs
            .into_iter()
            .map(|(start, len)| Interval::from_start_len(start, len))
            .collect()
    }

    pub fn insert(&mut self, interval: Interval) {
        // Ends are strictly increasing, so everything left of `first` is
        // separated from `interval` by a gap.
        let first = self
            .intervals
            .partition_point(|existing| existing.end() + 1 < interval.start());

        // Absorb neighbours until one no longer touches the growing interval.
        let mut merged = interval;
        let mut last = first;
        while let Some(existing) = self.intervals.get(last) {
            if !existing.overlaps_or_touches(&merged) {
                break;
            }
            merged = merged.merge_with(existing);
            last += 1;
        }

        self.intervals.splice(first..last, [merged]);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Smallest number covered by the set.
    pub fn min(&self) -> Option<i64> {
        self.intervals.first().map(Interval::start)
    }

    /// Total count of numbers covered by the set.
    pub fn covered(&self) -> i64 {
        self.intervals.iter().map(Interval::size).sum()
    }
}

impl Index<usize> for SortedIntervalSet {
    type Output = Interval;

    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl Extend<Interval> for SortedIntervalSet {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl FromIterator<Interval> for SortedIntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for SortedIntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortedIntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
