//! Day 16: Reindeer Maze.
//!
//! A lowest-cost search where the state is a tile together with the direction
//! the reindeer faces. Stepping forward costs 1, turning in place costs 1000.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use crate::grid::{Grid, Vec2};
use crate::{Part, PuzzleError, Result, Settings};

const STEP: u32 = 1;
const TURN: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct State {
    pos: Vec2,
    /// Index into [`Vec2::DIRS`].
    facing: u8,
}

impl State {
    fn dir(self) -> Vec2 {Vec2::DIRS[self.facing as usize]}

    fn turned(self, quarters: u8) -> State {State {pos: self.pos, facing: (self.facing + quarters) % 4}}

    fn index(self, grid: &Grid) -> usize {4 * grid.offset(self.pos) + self.facing as usize}

    fn moves(self, grid: &Grid) -> impl Iterator<Item = (State, u32)> {
        let ahead = self.pos + self.dir();
        let forward = (grid.get(ahead).is_some_and(|c| c != b'#')).then_some((State {pos: ahead, ..self}, STEP));
        forward.into_iter().chain([(self.turned(1), TURN), (self.turned(3), TURN)])
    }
}

/// Settled costs of every reachable state, and for each state all the
/// predecessors that reach it at that cost.
struct Search {
    cost: Vec<u32>,
    preds: Vec<Vec<State>>,
}

impl Search {
    fn run(grid: &Grid, start: State) -> Self {
        let states = 4 * grid.len();
        let mut cost = vec![u32::MAX; states];
        let mut preds = vec![vec![]; states];
        let mut settled = bitvec![0; states];
        let mut frontier = BinaryHeap::new();
        cost[start.index(grid)] = 0;
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((so_far, state))) = frontier.pop() {
            let at = state.index(grid);
            if settled[at] {continue}
            settled.set(at, true);
            for (next, step) in state.moves(grid) {
                let (to, candidate) = (next.index(grid), so_far + step);
                if candidate < cost[to] {
                    cost[to] = candidate;
                    preds[to] = vec![state];
                    frontier.push(Reverse((candidate, next)));
                } else if candidate == cost[to] {
                    preds[to].push(state);
                }
            }
        }
        Search {cost, preds}
    }

    /// Cheapest cost to stand on `end` facing any direction.
    fn lowest(&self, grid: &Grid, end: Vec2) -> Option<u32> {
        (0 .. 4).map(|facing| self.cost[State {pos: end, facing}.index(grid)]).filter(|&c| c != u32::MAX).min()
    }

    /// Number of tiles lying on at least one cheapest path to `end`.
    fn tiles_on_best_paths(&self, grid: &Grid, end: Vec2) -> Option<usize> {
        let best = self.lowest(grid, end)?;
        let mut seen = bitvec![0; self.cost.len()];
        let mut tiles = bitvec![0; grid.len()];
        let mut stack = (0 .. 4)
            .map(|facing| State {pos: end, facing})
            .filter(|s| self.cost[s.index(grid)] == best)
            .collect::<Vec<_>>();
        while let Some(state) = stack.pop() {
            if seen.replace(state.index(grid), true) {continue}
            tiles.set(grid.offset(state.pos), true);
            stack.extend(&self.preds[state.index(grid)]);
        }
        Some(tiles.count_ones())
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let grid = Grid::parse(input)?;
    let (start, end) = (grid.marker(b'S')?, grid.marker(b'E')?);
    let east = Vec2::DIRS.iter().position(|&d| d == Vec2::RIGHT).unwrap_or(1) as u8;
    let search = Search::run(&grid, State {pos: start, facing: east});
    let answer = match part {
        Part::One => search.lowest(&grid, end).map(|cost| cost as usize),
        Part::Two => search.tiles_on_best_paths(&grid, end),
    };
    answer.map(|n| n.to_string()).ok_or_else(|| PuzzleError::NoSolution("the end tile is unreachable".into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn first_example() {
        assert_eq!(solve(Part::One, FIRST, &Settings::EXAMPLE).unwrap(), "7036");
        assert_eq!(solve(Part::Two, FIRST, &Settings::EXAMPLE).unwrap(), "45");
    }

    #[test]
    fn second_example() {
        assert_eq!(solve(Part::One, SECOND, &Settings::EXAMPLE).unwrap(), "11048");
        assert_eq!(solve(Part::Two, SECOND, &Settings::EXAMPLE).unwrap(), "64");
    }

    #[test]
    fn straight_corridor_costs_one_per_step() {
        assert_eq!(solve(Part::One, "#####\n#S.E#\n#####\n", &Settings::EXAMPLE).unwrap(), "2");
        assert_eq!(solve(Part::Two, "#####\n#S.E#\n#####\n", &Settings::EXAMPLE).unwrap(), "3");
    }

    #[test]
    fn walled_off_end_is_no_solution() {
        let maze = "#######\n#S.#.E#\n#######\n";
        assert!(matches!(solve(Part::One, maze, &Settings::EXAMPLE), Err(PuzzleError::NoSolution(_))));
        assert!(matches!(solve(Part::Two, maze, &Settings::EXAMPLE), Err(PuzzleError::NoSolution(_))));
    }
}
