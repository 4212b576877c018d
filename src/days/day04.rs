//! Day 4: Ceres Search.

use crate::grid::{Grid, Vec2};
use crate::{Part, Result, Settings};

const COMPASS: [Vec2; 8] = [
    Vec2::new(-1, -1), Vec2::new(0, -1), Vec2::new(1, -1), Vec2::new(-1, 0),
    Vec2::new(1, 0), Vec2::new(-1, 1), Vec2::new(0, 1), Vec2::new(1, 1),
];

fn spells(grid: &Grid, from: Vec2, dir: Vec2, word: &[u8]) -> bool {
    word.iter().enumerate().all(|(i, &c)| grid.get(from + dir * i as i32) == Some(c))
}

fn is_x_mas(grid: &Grid, centre: Vec2) -> bool {
    let diagonal = |a: Vec2, b: Vec2| matches!(
        (grid.get(centre + a), grid.get(centre + b)),
        (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
    );
    grid[centre] == b'A'
        && diagonal(Vec2::new(-1, -1), Vec2::new(1, 1))
        && diagonal(Vec2::new(1, -1), Vec2::new(-1, 1))
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let count = match part {
        Part::One => grid.positions()
            .map(|p| COMPASS.iter().filter(|&&dir| spells(&grid, p, dir, b"XMAS")).count())
            .sum(),
        Part::Two => grid.positions().filter(|&p| is_x_mas(&grid, p)).count(),
    };
    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "18");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "9");
    }

    #[test]
    fn words_do_not_wrap_around_edges() {
        assert_eq!(solve(Part::One, "SAMX\nXMAS\n", &Settings::EXAMPLE).unwrap(), "2");
    }
}
