//! Day 15: Warehouse Woes.

use rustc_hash::FxHashSet;

use crate::grid::{Grid, Vec2};
use crate::parsing::blocks;
use crate::{Part, PuzzleError, Result, Settings};

/// Each tile of the map becomes two tiles, boxes become `[]`.
fn widen(map: &str) -> String {
    map.chars().map(|c| match c {
        '#' => "##", 'O' => "[]", '@' => "@.", '.' => "..", '\n' => "\n", _ => "",
    }).collect()
}

/// Tiles that move when the robot at `robot` steps in `dir`, in push order,
/// or `None` when a wall blocks the push.
fn pushed(grid: &Grid, robot: Vec2, dir: Vec2) -> Option<Vec<Vec2>> {
    let mut moving = vec![robot];
    let mut queued = FxHashSet::from_iter([robot]);
    let mut i = 0;
    while let Some(&p) = moving.get(i) {
        i += 1;
        let next = p + dir;
        let mut enqueue = |q: Vec2| if queued.insert(q) {moving.push(q)};
        match grid.get(next)? {
            b'#' => return None,
            b'O' => enqueue(next),
            b'[' => {enqueue(next); if dir.y != 0 {enqueue(next + Vec2::RIGHT)}}
            b']' => {enqueue(next); if dir.y != 0 {enqueue(next + Vec2::LEFT)}}
            _ => {}
        }
    }
    Some(moving)
}

fn simulate(grid: &mut Grid, moves: &str) -> Result<()> {
    let mut robot = grid.marker(b'@')?;
    for arrow in moves.bytes().filter(|b| !b.is_ascii_whitespace()) {
        let dir = Vec2::from_arrow(arrow)
            .ok_or_else(|| PuzzleError::malformed(format!("unknown move {:?}", arrow as char)))?;
        let Some(moving) = pushed(grid, robot, dir) else {continue};
        for &p in moving.iter().rev() {
            grid[p + dir] = grid[p];
            grid[p] = b'.';
        }
        robot += dir;
    }
    Ok(())
}

fn gps_sum(grid: &Grid) -> i32 {
    grid.cells().filter(|&(_, c)| c == b'O' || c == b'[').map(|(p, _)| 100 * p.y + p.x).sum()
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let blocks = blocks(input);
    let [map, moves] = &blocks[..] else {
        return Err(PuzzleError::malformed("expected a map and moves separated by a blank line"));
    };
    let mut grid = match part {
        Part::One => Grid::parse(map)?,
        Part::Two => Grid::parse(&widen(map))?,
    };
    simulate(&mut grid, moves)?;
    Ok(gps_sum(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn small_example() {
        assert_eq!(solve(Part::One, SMALL, &Settings::EXAMPLE).unwrap(), "2028");
    }

    #[test]
    fn wide_boxes_push_as_a_group() {
        let blocks = blocks(WIDE);
        let mut grid = Grid::parse(&widen(&blocks[0])).unwrap();
        simulate(&mut grid, &blocks[1]).unwrap();
        assert_eq!(grid.to_string(), "\
##############
##...[].##..##
##...@.[]...##
##....[]....##
##..........##
##..........##
##############
");
        assert_eq!(solve(Part::Two, WIDE, &Settings::EXAMPLE).unwrap(), "618");
    }
}
