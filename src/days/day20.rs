//! Day 20: Race Condition.

use std::collections::VecDeque;

use crate::grid::{Grid, Vec2};
use crate::{Part, PuzzleError, Result, Settings};

/// Distance from `start` of every reachable track tile.
fn distances(grid: &Grid, start: Vec2) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    dist[grid.offset(start)] = Some(0);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((p, d)) = queue.pop_front() {
        for n in p.neighbours() {
            if grid.get(n).is_some_and(|c| c != b'#') && dist[grid.offset(n)].is_none() {
                dist[grid.offset(n)] = Some(d + 1);
                queue.push_back((n, d + 1));
            }
        }
    }
    dist
}

/// Cheats of at most `max_len` picoseconds that save at least `min_saving`.
fn count_cheats(grid: &Grid, dist: &[Option<usize>], max_len: i32, min_saving: usize) -> usize {
    let mut count = 0;
    for from in grid.positions() {
        let Some(d_from) = dist[grid.offset(from)] else {continue};
        for dy in -max_len ..= max_len {
            let reach = max_len - dy.abs();
            for dx in -reach ..= reach {
                let to = from + Vec2::new(dx, dy);
                if !grid.contains(to) {continue}
                let Some(d_to) = dist[grid.offset(to)] else {continue};
                let len = (dx.abs() + dy.abs()) as usize;
                if d_to >= d_from + len + min_saving {count += 1}
            }
        }
    }
    count
}

pub fn solve(part: Part, input: &str, settings: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let (start, end) = (grid.marker(b'S')?, grid.marker(b'E')?);
    let dist = distances(&grid, start);
    if dist[grid.offset(end)].is_none() {
        return Err(PuzzleError::NoSolution("the race track does not reach the end".into()));
    }
    let max_len = match part {Part::One => 2, Part::Two => 20};
    Ok(count_cheats(&grid, &dist, max_len, settings.min_saving.max(1)).to_string())
}
