//! Day 12: Garden Groups.

use crate::grid::{Grid, Vec2};
use crate::{Part, Result, Settings};

struct Region {area: usize, perimeter: usize, corners: usize}

/// A region has as many sides as corners.
fn corners(grid: &Grid, p: Vec2) -> usize {
    let plant = grid.get(p);
    let same = |q: Vec2| grid.get(q) == plant;
    Vec2::DIRS.into_iter().filter(|&d| {
        let e = d.turn_right();
        let (side_a, side_b) = (same(p + d), same(p + e));
        (!side_a && !side_b) || (side_a && side_b && !same(p + d + e))
    }).count()
}

fn flood(grid: &Grid, start: Vec2, seen: &mut [bool]) -> Region {
    let plant = grid[start];
    let mut region = Region {area: 0, perimeter: 0, corners: 0};
    let mut stack = vec![start];
    seen[grid.offset(start)] = true;
    while let Some(p) = stack.pop() {
        region.area += 1;
        region.corners += corners(grid, p);
        for n in p.neighbours() {
            if grid.get(n) != Some(plant) {
                region.perimeter += 1;
            } else if !seen[grid.offset(n)] {
                seen[grid.offset(n)] = true;
                stack.push(n);
            }
        }
    }
    region
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut seen = vec![false; grid.len()];
    let mut price = 0;
    for p in grid.positions() {
        if seen[grid.offset(p)] {continue}
        let region = flood(&grid, p, &mut seen);
        price += region.area * match part {Part::One => region.perimeter, Part::Two => region.corners};
    }
    Ok(price.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn both(map: &str) -> (String, String) {
        (solve(Part::One, map, &Settings::EXAMPLE).unwrap(), solve(Part::Two, map, &Settings::EXAMPLE).unwrap())
    }

    #[test]
    fn small_examples() {
        assert_eq!(both("AAAA\nBBCD\nBBCC\nEEEC\n"), ("140".into(), "80".into()));
        assert_eq!(both("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n"), ("772".into(), "436".into()));
    }

    #[test]
    fn larger_example() {
        let map = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";
        assert_eq!(both(map), ("1930".into(), "1206".into()));
    }

    #[test]
    fn inner_corners_count_as_sides() {
        assert_eq!(solve(Part::Two, "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n", &Settings::EXAMPLE).unwrap(), "236");
        let map = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n";
        assert_eq!(solve(Part::Two, map, &Settings::EXAMPLE).unwrap(), "368");
    }
}
