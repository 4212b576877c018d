//! Day 10: Hoof It.

use rustc_hash::FxHashSet;

use crate::grid::{Grid, Vec2};
use crate::{Part, Result, Settings};

/// Every step climbs exactly one level.
fn uphill(grid: &Grid, p: Vec2) -> impl Iterator<Item = Vec2> + '_ {
    let height = grid[p];
    p.neighbours().filter(move |&n| grid.get(n) == Some(height + 1))
}

fn summits(grid: &Grid, p: Vec2, found: &mut FxHashSet<Vec2>) {
    if grid[p] == b'9' {
        found.insert(p);
    } else {
        for next in uphill(grid, p) {summits(grid, next, found)}
    }
}

/// Number of distinct trails from `p`, memoised per tile.
fn rating(grid: &Grid, p: Vec2, memo: &mut [Option<usize>]) -> usize {
    if grid[p] == b'9' {return 1}
    if let Some(known) = memo[grid.offset(p)] {return known}
    let total = uphill(grid, p).collect::<Vec<_>>().into_iter().map(|next| rating(grid, next, memo)).sum();
    memo[grid.offset(p)] = Some(total);
    total
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let trailheads = grid.cells().filter(|&(_, c)| c == b'0').map(|(p, _)| p);
    let total: usize = match part {
        Part::One => trailheads.map(|head| {
            let mut found = FxHashSet::default();
            summits(&grid, head, &mut found);
            found.len()
        }).sum(),
        Part::Two => {
            let mut memo = vec![None; grid.len()];
            trailheads.map(|head| rating(&grid, head, &mut memo)).sum()
        }
    };
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "36");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "81");
    }

    #[test]
    fn impassable_tiles_are_skipped() {
        let map = "...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9\n";
        assert_eq!(solve(Part::One, map, &Settings::EXAMPLE).unwrap(), "2");
    }
}
