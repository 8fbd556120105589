use chumsky::prelude::*;

use crate::pipeline::Pipeline;
use crate::stage::{MapRule, StageMapper};

/// A `<source>-to-<destination> map:` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryMap {
    pub source: String,
    pub destination: String,
    pub mapper: StageMapper,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    /// Raw numbers of the `seeds:` line, each part reads them differently.
    pub seeds: Vec<i64>,
    pub maps: Vec<CategoryMap>,
}

impl Almanac {
    /// Stages in the order the maps appear in the almanac.
    pub fn pipeline(&self) -> Pipeline {
        self.maps.iter().map(|map| map.mapper.clone()).collect()
    }
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Almanac, extra::Err<Rich<'a, char>>> {
    // Robust newline parser handling CRLF (\r\n) or LF (\n)
    let newline = just('\r').or_not().ignore_then(just('\n'));
    let number = text::int(10).from_str::<i64>().unwrapped();

    let seeds = just("seeds:").ignore_then(
        just(' ')
            .repeated()
            .at_least(1)
            .ignore_then(number)
            .repeated()
            .at_least(1)
            .collect::<Vec<_>>(),
    );

    let category = any()
        .filter(|c: &char| c.is_ascii_lowercase())
        .repeated()
        .at_least(1)
        .to_slice()
        .map(ToString::to_string);

    let header = category
        .clone()
        .then_ignore(just("-to-"))
        .then(category)
        .then_ignore(just(" map:"))
        .then_ignore(newline);

    // <destination start> <source start> <length>
    let rule = number
        .then_ignore(just(' '))
        .then(number)
        .then_ignore(just(' '))
        .then(number)
        .try_map(|((destination, source), len), span| {
            MapRule::from_triple(destination, source, len).map_err(|e| Rich::custom(span, e))
        });

    let map = header
        .then(
            rule.separated_by(newline)
                .allow_trailing()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|((source, destination), rules)| CategoryMap {
            source,
            destination,
            mapper: StageMapper::new(rules),
        });

    // Structure: Seeds -> Blank Line -> Maps separated by blank lines
    seeds
        .then_ignore(newline.repeated().at_least(1))
        .then(
            map.separated_by(newline)
                .allow_trailing()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(seeds, maps)| Almanac { seeds, maps })
        .padded()
}
