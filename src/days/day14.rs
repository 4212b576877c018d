//! Day 14: Restroom Redoubt.

use log::debug;
use rustc_hash::FxHashSet;

use crate::parsing::ints;
use crate::{Part, PuzzleError, Result, Settings};

const SECONDS: i64 = 100;

#[derive(Clone, Copy, Debug)]
struct Robot {pos: (i64, i64), vel: (i64, i64)}

impl Robot {
    fn after(&self, seconds: i64, (w, h): (i64, i64)) -> (i64, i64) {
        ((self.pos.0 + self.vel.0 * seconds).rem_euclid(w), (self.pos.1 + self.vel.1 * seconds).rem_euclid(h))
    }
}

fn parse(input: &str) -> Result<Vec<Robot>> {
    let robots = input.trim().lines().map(|line| match ints(line)?[..] {
        [px, py, vx, vy] => Ok(Robot {pos: (px, py), vel: (vx, vy)}),
        _ => Err(PuzzleError::malformed(format!("cannot parse robot {line:?}"))),
    }).collect::<Result<Vec<_>>>()?;
    if robots.is_empty() {return Err(PuzzleError::malformed("no robots"))}
    Ok(robots)
}

fn safety_factor(robots: &[Robot], area @ (w, h): (i64, i64)) -> usize {
    let mut quadrants = [0usize; 4];
    for robot in robots {
        let (x, y) = robot.after(SECONDS, area);
        if x == w / 2 || y == h / 2 {continue}
        quadrants[usize::from(x > w / 2) + 2 * usize::from(y > h / 2)] += 1;
    }
    quadrants.iter().product()
}

/// Size of the largest 4-connected group of occupied tiles, wrapping at the edges.
fn largest_cluster(occupied: &FxHashSet<(i64, i64)>, (w, h): (i64, i64)) -> usize {
    let mut seen = FxHashSet::default();
    let mut largest = 0;
    for &start in occupied {
        if !seen.insert(start) {continue}
        let mut stack = vec![start];
        let mut size = 0;
        while let Some((x, y)) = stack.pop() {
            size += 1;
            for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let next = ((x + dx).rem_euclid(w), (y + dy).rem_euclid(h));
                if occupied.contains(&next) && seen.insert(next) {stack.push(next)}
            }
        }
        largest = largest.max(size);
    }
    largest
}

/// First second at which a quarter of the robots huddle together.
fn picture_second(robots: &[Robot], area @ (w, h): (i64, i64)) -> Option<i64> {
    // Positions repeat every w * h seconds.
    (1 ..= w * h).find(|&seconds| {
        let occupied = robots.iter().map(|r| r.after(seconds, area)).collect::<FxHashSet<_>>();
        let found = largest_cluster(&occupied, area) >= occupied.len() / 4;
        if found {debug!("cluster of robots after {seconds} seconds")}
        found
    })
}

pub fn solve(part: Part, input: &str, settings: &Settings) -> Result<String> {
    let robots = parse(input)?;
    match part {
        Part::One => Ok(safety_factor(&robots, settings.area).to_string()),
        Part::Two => picture_second(&robots, settings.area)
            .map(|seconds| seconds.to_string())
            .ok_or_else(|| PuzzleError::NoSolution("the robots never cluster".into())),
    }
}
