//! Day 18: RAM Run.

use std::collections::VecDeque;

use crate::grid::{Grid, Vec2};
use crate::parsing::{num, pair};
use crate::{Part, PuzzleError, Result, Settings};

fn parse(input: &str) -> Result<Vec<Vec2>> {
    input.trim().lines().map(|line| {
        let (x, y) = pair(line, ",")?;
        Ok(Vec2::new(num(x)?, num(y)?))
    }).collect()
}

/// Steps of the shortest path from the top-left to the bottom-right corner.
fn shortest_path(memory: &Grid) -> Option<usize> {
    let (start, goal) = (Vec2::ZERO, Vec2::new(memory.width() - 1, memory.height() - 1));
    if memory.get(start) != Some(b'.') {return None}
    let mut dist = vec![usize::MAX; memory.len()];
    dist[memory.offset(start)] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist[memory.offset(p)];
        if p == goal {return Some(d)}
        for n in p.neighbours() {
            if memory.get(n) == Some(b'.') && dist[memory.offset(n)] == usize::MAX {
                dist[memory.offset(n)] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn corrupted(bytes: &[Vec2], size: i32) -> Grid {
    let mut memory = Grid::filled(size + 1, size + 1, b'.');
    for &byte in bytes {
        memory.set(byte, b'#');
    }
    memory
}

pub fn solve(part: Part, input: &str, settings: &Settings) -> Result<String> {
    let bytes = parse(input)?;
    let size = settings.memory_size;
    if let Some(byte) = bytes.iter().find(|b| !(0 ..= size).contains(&b.x) || !(0 ..= size).contains(&b.y)) {
        return Err(PuzzleError::malformed(format!("byte {byte} falls outside the 0..={size} memory space")));
    }
    match part {
        Part::One => {
            let fallen = &bytes[.. settings.fallen_bytes.min(bytes.len())];
            shortest_path(&corrupted(fallen, size))
                .map(|steps| steps.to_string())
                .ok_or_else(|| PuzzleError::NoSolution("the exit is already cut off".into()))
        }
        Part::Two => {
            // Blocking is monotone in the number of fallen bytes: bisect for the first blocking prefix.
            let (mut open, mut blocked) = (0, bytes.len());
            if shortest_path(&corrupted(&bytes, size)).is_some() {
                return Err(PuzzleError::NoSolution("the exit stays reachable after every byte".into()));
            }
            while blocked - open > 1 {
                let mid = (open + blocked) / 2;
                if shortest_path(&corrupted(&bytes[.. mid], size)).is_some() {open = mid} else {blocked = mid}
            }
            Ok(bytes[blocked - 1].to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "22");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "6,1");
    }

    #[test]
    fn one_byte_off_the_path_keeps_it_manhattan() {
        assert_eq!(solve(Part::One, "6,0\n", &Settings::EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn bytes_outside_memory_are_malformed() {
        assert!(matches!(solve(Part::One, "0,1\n7,3\n", &Settings::EXAMPLE), Err(PuzzleError::Malformed(_))));
        assert!(matches!(solve(Part::Two, "0,1\n3,-1\n", &Settings::EXAMPLE), Err(PuzzleError::Malformed(_))));
    }
}
