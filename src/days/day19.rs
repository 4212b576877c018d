//! Day 19: Linen Layout.

use rustc_hash::FxHashSet;

use crate::parsing::blocks;
use crate::{Part, PuzzleError, Result, Settings};

/// Number of ways `design` splits into towel patterns, by prefix length.
fn arrangements(design: &[u8], towels: &FxHashSet<&[u8]>, longest: usize) -> u64 {
    let mut ways = vec![0u64; design.len() + 1];
    ways[0] = 1;
    for start in 0 .. design.len() {
        if ways[start] == 0 {continue}
        for end in start + 1 ..= design.len().min(start + longest) {
            if towels.contains(&design[start .. end]) {ways[end] += ways[start]}
        }
    }
    ways[design.len()]
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let blocks = blocks(input);
    let [towels, designs] = &blocks[..] else {
        return Err(PuzzleError::malformed("expected towels and designs separated by a blank line"));
    };
    let towels = towels.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::as_bytes).collect::<FxHashSet<_>>();
    let longest = towels.iter().map(|t| t.len()).max().unwrap_or(0);
    let ways = designs.lines().map(|design| arrangements(design.trim().as_bytes(), &towels, longest));
    Ok(match part {
        Part::One => ways.filter(|&n| n > 0).count() as u64,
        Part::Two => ways.sum(),
    }.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "6");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "16");
    }

    #[test]
    fn counts_each_segmentation() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"].map(str::as_bytes);
        let towels = FxHashSet::from_iter(towels);
        assert_eq!(arrangements(b"gbbr", &towels, 3), 4);
        assert_eq!(arrangements(b"ubwu", &towels, 3), 0);
    }
}
