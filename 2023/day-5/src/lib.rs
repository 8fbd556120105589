pub mod interval;
pub mod interval_set;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod pipeline;
pub mod stage;
