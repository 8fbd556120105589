use crate::interval::{Interval, IntervalError};
use crate::interval_set::SortedIntervalSet;
use std::cmp::Ordering;

/// Shifts every number inside `source` by `delta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MapRule {
    // order of fields matters for the derived Ord
    source: Interval,
    delta: i64,
}

impl MapRule {
    pub fn new(source: Interval, delta: i64) -> Self {
        Self { source, delta }
    }

    /// Builds a rule from an almanac line `<destination> <source> <length>`.
    pub fn from_triple(destination: i64, source: i64, len: i64) -> Result<Self, IntervalError> {
        Ok(Self::new(
            Interval::from_start_len(source, len)?,
            destination - source,
        ))
    }

    pub fn source(&self) -> Interval {
        self.source
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn map_value(&self, value: i64) -> Option<i64> {
        self.source.contains(value).then_some(value + self.delta)
    }
}

/// One remapping layer of the almanac, e.g. `seed-to-soil`.
///
/// Numbers covered by a rule are shifted by that rule's delta, everything else
/// maps to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageMapper {
    /// Sorted by source start. The almanac never defines overlapping sources,
    /// so this is not re-checked.
    rules: Vec<MapRule>,
}

impl StageMapper {
    pub fn new(rules: impl IntoIterator<Item = MapRule>) -> Self {
        let mut rules = rules.into_iter().collect::<Vec<_>>();
        rules.sort_unstable();
        Self { rules }
    }

    /// Stage without rules, mapping every number to itself.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_triples(
        triples: impl IntoIterator<Item = (i64, i64, i64)>,
    ) -> Result<Self, IntervalError> {
        let rules = triples
            .into_iter()
            .map(|(destination, source, len)| MapRule::from_triple(destination, source, len))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[MapRule] {
        &self.rules
    }

    pub fn map_value(&self, value: i64) -> i64 {
        let found = self.rules.binary_search_by(|rule| {
            let source = rule.source();
            if source.contains(value) {
                Ordering::Equal
            } else if source.start() > value {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        });

        found
            .ok()
            .and_then(|index| self.rules[index].map_value(value))
            .unwrap_or(value)
    }

    /// Maps a whole set of intervals through this stage.
    ///
    /// Both the input intervals and the rules are sorted, so a single sweep
    /// with one cursor on each is enough. Intervals straddling a rule
    /// boundary are split, and the uncovered parts pass through unchanged.
    pub fn apply(&self, input: &SortedIntervalSet) -> SortedIntervalSet {
        let mut output = SortedIntervalSet::new();
        let mut rules = self.rules.iter().peekable();

        for interval in input {
            let mut remaining = Some(*interval);

            while let Some(current) = remaining {
                let Some(rule) = rules.peek().copied() else {
                    // Past the last rule, the rest is identity.
                    output.insert(current);
                    break;
                };
                let source = rule.source();

                if source.end() < current.start() {
                    rules.next();
                    continue;
                }

                if current.end() < source.start() {
                    tracing::trace!(%current, "no rule covers interval");
                    output.insert(current);
                    break;
                }

                if let Some(prefix) = current.subtract_above(&source) {
                    tracing::trace!(%prefix, "unmapped prefix");
                    output.insert(prefix);
                }

                if let Some(overlap) = current.intersection(&source) {
                    let mapped = overlap.shifted_by(rule.delta());
                    tracing::trace!(%overlap, %mapped, delta = rule.delta(), "mapped");
                    output.insert(mapped);
                }

                // Whatever is left lies past this rule.
                remaining = current.subtract_below(&source);
                if remaining.is_some() {
                    rules.next();
                }
            }
        }

        output
    }
}
