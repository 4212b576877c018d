//! Day 6: Guard Gallivant.

use bitvec::prelude::*;

use crate::grid::{Grid, Vec2};
use crate::{Part, PuzzleError, Result, Settings};

enum Walk {
    /// The guard left the map; the visited tiles are set.
    Exit(BitVec),
    Loop,
}

fn dir_index(dir: Vec2) -> usize {
    Vec2::DIRS.iter().position(|&d| d == dir).unwrap_or(0)
}

/// Walks the guard until it leaves the map or repeats a (tile, facing) state.
fn walk(grid: &Grid, start: Vec2, facing: Vec2, obstacle: Option<Vec2>) -> Walk {
    let mut tiles = bitvec![0; grid.len()];
    let mut states = bitvec![0; 4 * grid.len()];
    let (mut pos, mut dir) = (start, facing);
    loop {
        let state = 4 * grid.offset(pos) + dir_index(dir);
        if states[state] {return Walk::Loop}
        states.set(state, true);
        tiles.set(grid.offset(pos), true);

        let next = pos + dir;
        match grid.get(next) {
            None => return Walk::Exit(tiles),
            Some(b'#') => dir = dir.turn_right(),
            Some(_) if Some(next) == obstacle => dir = dir.turn_right(),
            Some(_) => pos = next,
        }
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let (start, facing) = grid.cells()
        .find_map(|(p, c)| Vec2::from_arrow(c).map(|dir| (p, dir)))
        .ok_or(PuzzleError::MissingMarker('^'))?;
    let Walk::Exit(visited) = walk(&grid, start, facing, None) else {
        return Err(PuzzleError::NoSolution("the guard never leaves the map".into()));
    };

    let answer = match part {
        Part::One => visited.count_ones(),
        Part::Two => grid.positions()
            .filter(|&p| p != start && visited[grid.offset(p)])
            .filter(|&p| matches!(walk(&grid, start, facing, Some(p)), Walk::Loop))
            .count(),
    };
    Ok(answer.to_string())
}
