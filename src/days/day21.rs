//! Day 21: Keypad Conundrum.

use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::grid::Vec2;
use crate::parsing::num;
use crate::{Part, PuzzleError, Result, Settings};

const NUMERIC: [&[u8]; 4] = [b"789", b"456", b"123", b" 0A"];
const DIRECTIONAL: [&[u8]; 2] = [b" ^A", b"<v>"];

/// Keys pressed on one pad to move its arm between two keys and press the second.
type Presses = ArrayVec<u8, 8>;

fn key_pos(pad: &[&[u8]], key: u8) -> Option<Vec2> {
    pad.iter().enumerate().find_map(|(y, row)| row.iter().position(|&k| k == key).map(|x| Vec2::new(x as i32, y as i32)))
}

/// Both straight-line orders (horizontal first, vertical first) that keep
/// the arm off the gap.
fn routes(pad: &[&[u8]], from: u8, to: u8) -> Result<ArrayVec<Presses, 2>> {
    let missing = |k: u8| PuzzleError::malformed(format!("no key {:?} on the keypad", k as char));
    let (a, b) = (key_pos(pad, from).ok_or_else(|| missing(from))?, key_pos(pad, to).ok_or_else(|| missing(to))?);
    let gap = key_pos(pad, b' ').ok_or_else(|| missing(b' '))?;
    let d = b - a;
    let horizontal = [if d.x < 0 {b'<'} else {b'>'}].repeat(d.x.unsigned_abs() as usize);
    let vertical = [if d.y < 0 {b'^'} else {b'v'}].repeat(d.y.unsigned_abs() as usize);

    let mut routes = ArrayVec::new();
    for (first, second, corner) in [(&horizontal, &vertical, Vec2::new(b.x, a.y)), (&vertical, &horizontal, Vec2::new(a.x, b.y))] {
        if corner == gap {continue}
        let route: Presses = first.iter().chain(second).copied().chain([b'A']).collect();
        if !routes.contains(&route) {routes.push(route)}
    }
    Ok(routes)
}

/// Counts human key presses through a chain of directional keypads.
struct Chain {
    memo: FxHashMap<(u8, u8, usize), u64>,
}

impl Chain {
    /// Presses needed to type `keys` on a directional pad `depth` robots away from the human.
    fn presses(&mut self, keys: &[u8], depth: usize) -> Result<u64> {
        if depth == 0 {return Ok(keys.len() as u64)}
        let mut arm = b'A';
        let mut total = 0;
        for &key in keys {
            total += self.step(arm, key, depth)?;
            arm = key;
        }
        Ok(total)
    }

    fn step(&mut self, from: u8, to: u8, depth: usize) -> Result<u64> {
        if let Some(&known) = self.memo.get(&(from, to, depth)) {return Ok(known)}
        let mut best = u64::MAX;
        for route in routes(&DIRECTIONAL, from, to)? {
            best = best.min(self.presses(&route, depth - 1)?);
        }
        self.memo.insert((from, to, depth), best);
        Ok(best)
    }

    /// Presses the human makes for `code` on the numeric pad behind `robots` directional robots.
    fn code(&mut self, code: &[u8], robots: usize) -> Result<u64> {
        let mut arm = b'A';
        let mut total = 0;
        for &key in code {
            let mut best = u64::MAX;
            for route in routes(&NUMERIC, arm, key)? {
                best = best.min(self.presses(&route, robots)?);
            }
            total += best;
            arm = key;
        }
        Ok(total)
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let robots = match part {Part::One => 2, Part::Two => 25};
    let mut chain = Chain {memo: FxHashMap::default()};
    let mut complexity = 0;
    for code in input.split_whitespace() {
        let value: u64 = num(code.trim_end_matches('A'))?;
        complexity += chain.code(code.as_bytes(), robots)? * value;
    }
    Ok(complexity.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "029A\n980A\n179A\n456A\n379A\n";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "126384");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "154115708116294");
    }

    #[test]
    fn sequence_lengths() {
        let mut chain = Chain {memo: FxHashMap::default()};
        assert_eq!(chain.code(b"029A", 0).unwrap(), 12);
        assert_eq!(chain.code(b"029A", 1).unwrap(), 28);
        assert_eq!(chain.code(b"029A", 2).unwrap(), 68);
        assert_eq!(chain.code(b"379A", 2).unwrap(), 64);
    }

    #[test]
    fn routes_avoid_the_gap() {
        let routes = routes(&NUMERIC, b'A', b'1').unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].as_slice(), b"^<<A");
    }
}
