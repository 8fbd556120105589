use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

use crate::interval_set::SortedIntervalSet;
use crate::parser::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let almanac = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if almanac.seeds.len() % 2 != 0 {
        return Err(miette!(
            "seed ranges come in (start, length) pairs, got {} numbers",
            almanac.seeds.len()
        ));
    }

    // Seeds are (start, length) pairs now, far too many to map one by one
    let seeds = SortedIntervalSet::from_start_lengths(almanac.seeds.iter().copied().tuples())?;
    tracing::debug!(intervals = seeds.len(), covered = seeds.covered(), "seed ranges");

    let locations = almanac.pipeline().run(seeds);

    // Mapping never drops numbers, so this is only empty without seeds
    let lowest_location = locations
        .min()
        .ok_or_else(|| miette!("no seeds to map"))?;

    Ok(lowest_location.to_string())
}
