use crate::{Part, Result, Settings};

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;
pub mod day23;
pub mod day24;
pub mod day25;

pub type Solver = fn(Part, &str, &Settings) -> Result<String>;

pub const SOLVERS: [Solver; 25] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve,
    day06::solve, day07::solve, day08::solve, day09::solve, day10::solve,
    day11::solve, day12::solve, day13::solve, day14::solve, day15::solve,
    day16::solve, day17::solve, day18::solve, day19::solve, day20::solve,
    day21::solve, day22::solve, day23::solve, day24::solve, day25::solve,
];
