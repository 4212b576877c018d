//! Day 11: Plutonian Pebbles.

use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::parsing::num;
use crate::{Part, Result, Settings};

fn blink(stone: u64) -> ArrayVec<u64, 2> {
    let mut next = ArrayVec::new();
    if stone == 0 {
        next.push(1);
    } else {
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            next.push(stone / half);
            next.push(stone % half);
        } else {
            next.push(stone * 2024);
        }
    }
    next
}

/// Stone count after `blinks`, tracking how many stones carry each number.
fn count_after(stones: &[u64], blinks: usize) -> u64 {
    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for &stone in stones {*counts.entry(stone).or_default() += 1}
    for _ in 0 .. blinks {
        let mut next: FxHashMap<u64, u64> = FxHashMap::default();
        for (stone, n) in counts {
            for split in blink(stone) {*next.entry(split).or_default() += n}
        }
        counts = next;
    }
    counts.values().sum()
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let stones = input.split_whitespace().map(num).collect::<Result<Vec<u64>>>()?;
    let blinks = match part {Part::One => 25, Part::Two => 75};
    Ok(count_after(&stones, blinks).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn example() {
        assert_eq!(count_after(&[125, 17], 6), 22);
        assert_eq!(solve(Part::One, "125 17\n", &Settings::EXAMPLE).unwrap(), "55312");
    }

    #[test]
    fn splitting_drops_leading_zeros() {
        assert_eq!(blink(1000).as_slice(), &[10, 0]);
        assert_eq!(blink(0).as_slice(), &[1]);
        assert_eq!(blink(125).as_slice(), &[253000]);
    }
}
