//! Day 8: Resonant Collinearity.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{Grid, Vec2};
use crate::{Part, Result, Settings};

fn gcd(a: i32, b: i32) -> i32 {if b == 0 {a.abs()} else {gcd(b, a % b)}}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut antennas: FxHashMap<u8, Vec<Vec2>> = FxHashMap::default();
    for (p, c) in grid.cells().filter(|&(_, c)| c != b'.') {
        antennas.entry(c).or_default().push(p);
    }

    let mut antinodes = FxHashSet::default();
    for (&a, &b) in antennas.values().flat_map(|same| same.iter().tuple_combinations()) {
        match part {
            Part::One => antinodes.extend([a + (a - b), b + (b - a)].into_iter().filter(|&p| grid.contains(p))),
            Part::Two => {
                let delta = b - a;
                let step = Vec2::new(delta.x / gcd(delta.x, delta.y), delta.y / gcd(delta.x, delta.y));
                for dir in [step, -step] {
                    antinodes.extend((0 ..).map(|n| a + dir * n).take_while(|&p| grid.contains(p)));
                }
            }
        }
    }
    Ok(antinodes.len().to_string())
}
