//! Day 25: Code Chronicle.

use itertools::Itertools;

use crate::grid::{Grid, Vec2};
use crate::parsing::blocks;
use crate::{Part, PuzzleError, Result, Settings};

/// Pin heights per column, not counting the solid base row.
type Heights = Vec<usize>;

/// Splits the schematics into locks (solid top row) and keys (solid bottom row).
fn schematics(input: &str) -> Result<(Vec<Heights>, Vec<Heights>, usize)> {
    let mut locks = vec![];
    let mut keys = vec![];
    let mut room = None;
    for block in blocks(input) {
        let grid = Grid::parse(&block)?;
        let space = (grid.height() as usize).checked_sub(2)
            .ok_or_else(|| PuzzleError::malformed("schematic without room for pins"))?;
        if *room.get_or_insert(space) != space {
            return Err(PuzzleError::malformed("schematics differ in height"));
        }
        let heights = (0 .. grid.width())
            .map(|x| (0 .. grid.height()).filter(|&y| grid[Vec2::new(x, y)] == b'#').count().saturating_sub(1))
            .collect();
        let top_solid = (0 .. grid.width()).all(|x| grid[Vec2::new(x, 0)] == b'#');
        if top_solid {locks.push(heights)} else {keys.push(heights)}
    }
    Ok((locks, keys, room.unwrap_or(0)))
}

fn fits(lock: &Heights, key: &Heights, room: usize) -> bool {
    lock.iter().zip(key).all(|(l, k)| l + k <= room)
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    match part {
        Part::One => {
            let (locks, keys, room) = schematics(input)?;
            Ok(locks.iter().cartesian_product(&keys).filter(|(lock, key)| fits(lock, key, room)).count().to_string())
        }
        Part::Two => Ok("Merry Christmas!".to_owned()),
    }
}
