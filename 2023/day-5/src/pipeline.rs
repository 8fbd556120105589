use crate::interval_set::SortedIntervalSet;
use crate::stage::StageMapper;

/// Ordered chain of stages, the output of one feeding the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<StageMapper>,
}

impl Pipeline {
    pub fn new(stages: Vec<StageMapper>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[StageMapper] {
        &self.stages
    }

    pub fn run(&self, initial: SortedIntervalSet) -> SortedIntervalSet {
        self.stages
            .iter()
            .enumerate()
            .fold(initial, |set, (index, stage)| {
                let mapped = stage.apply(&set);
                tracing::debug!(
                    stage = index,
                    intervals = mapped.len(),
                    covered = mapped.covered(),
                    "applied stage"
                );
                mapped
            })
    }

    /// Follows a single number through every stage.
    pub fn map_value(&self, value: i64) -> i64 {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.map_value(value))
    }
}

impl FromIterator<StageMapper> for Pipeline {
    fn from_iter<T: IntoIterator<Item = StageMapper>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::interval::Interval;
    use miette::Result;
    use rstest::{fixture, rstest};

    fn set(intervals: &[(i64, i64)]) -> SortedIntervalSet {
        intervals
            .iter()
            .map(|&(start, end)| Interval::new(start, end).unwrap())
            .collect()
    }

    /// The seven maps of the sample almanac, seed-to-soil first.
    #[fixture]
    fn pipeline() -> Pipeline {
        let maps: [Vec<(i64, i64, i64)>; 7] = [
            vec![(50, 98, 2), (52, 50, 48)],
            vec![(0, 15, 37), (37, 52, 2), (39, 0, 15)],
            vec![(49, 53, 8), (0, 11, 42), (42, 0, 7), (57, 7, 4)],
            vec![(88, 18, 7), (18, 25, 70)],
            vec![(45, 77, 23), (81, 45, 19), (68, 64, 13)],
            vec![(0, 69, 1), (1, 0, 69)],
            vec![(60, 56, 37), (56, 93, 4)],
        ];
        maps.into_iter()
            .map(|triples| StageMapper::from_triples(triples).unwrap())
            .collect()
    }

    #[rstest]
    #[case::seed_to_soil(0, &[(55, 67), (79, 92)], &[(57, 69), (81, 94)])]
    #[case::soil_to_fertilizer(1, &[(57, 69), (81, 94)], &[(57, 69), (81, 94)])]
    #[case::fertilizer_to_water(2, &[(57, 69), (81, 94)], &[(53, 56), (61, 69), (81, 94)])]
    #[case::water_to_light(3, &[(53, 56), (61, 69), (81, 94)], &[(46, 49), (54, 62), (74, 87)])]
    #[case::light_to_temperature(
        4,
        &[(46, 49), (54, 62), (74, 87)],
        &[(45, 55), (78, 80), (82, 85), (90, 98)]
    )]
    #[case::temperature_to_humidity(
        5,
        &[(45, 55), (78, 80), (82, 85), (90, 98)],
        &[(46, 56), (78, 80), (82, 85), (90, 98)]
    )]
    #[case::humidity_to_location(
        6,
        &[(46, 56), (78, 80), (82, 85), (90, 98)],
        &[(46, 60), (82, 84), (86, 89), (94, 98)]
    )]
    fn sample_stages(
        pipeline: Pipeline,
        #[case] stage: usize,
        #[case] input: &[(i64, i64)],
        #[case] expected: &[(i64, i64)],
    ) {
        assert_eq!(pipeline.stages()[stage].apply(&set(input)), set(expected));
    }

    #[rstest]
    fn run_folds_every_stage(pipeline: Pipeline) -> Result<()> {
        let seeds = SortedIntervalSet::from_start_lengths([(79, 14), (55, 13)])?;
        let locations = pipeline.run(seeds);
        assert_eq!(locations, set(&[(46, 60), (82, 84), (86, 89), (94, 98)]));
        assert_eq!(locations.min(), Some(46));
        Ok(())
    }

    #[rstest]
    #[case(79, 82)]
    #[case(14, 43)]
    #[case(55, 86)]
    #[case(13, 35)]
    fn map_value_follows_a_seed(pipeline: Pipeline, #[case] seed: i64, #[case] location: i64) {
        assert_eq!(pipeline.map_value(seed), location);
    }

    #[rstest]
    fn run_agrees_with_map_value(pipeline: Pipeline) -> Result<()> {
        let seeds = SortedIntervalSet::from_start_lengths([(79, 14), (55, 13)])?;
        let expected: SortedIntervalSet = seeds
            .iter()
            .flat_map(|seed| seed.start()..=seed.end())
            .map(|seed| {
                let location = pipeline.map_value(seed);
                Interval::new(location, location).unwrap()
            })
            .collect();
        assert_eq!(pipeline.run(seeds), expected);
        Ok(())
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let seeds = set(&[(1, 4), (9, 9)]);
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.run(seeds.clone()), seeds);
        assert_eq!(pipeline.map_value(7), 7);
    }
}
