use chumsky::prelude::*;
use miette::*;
use rayon::prelude::*;

use crate::parser::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let almanac = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let pipeline = almanac.pipeline();

    // Every seed is independent, so map them all in parallel
    let lowest_location = almanac
        .seeds
        .par_iter()
        .map(|&seed| pipeline.map_value(seed))
        .min()
        .ok_or_else(|| miette!("no seeds to map"))?;

    Ok(lowest_location.to_string())
}
