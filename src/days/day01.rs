//! Day 1: Historian Hysteria.

use std::iter::zip;

use itertools::Itertools;

use crate::parsing::num;
use crate::{Part, PuzzleError, Result, Settings};

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.trim().lines() {
        let Some((left, right)) = line.split_whitespace().collect_tuple() else {
            return Err(PuzzleError::malformed(format!("cannot parse {line:?} as two numbers")));
        };
        lefts.push(num(left)?);
        rights.push(num(right)?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let (mut lefts, mut rights) = parse(input)?;
    let answer = match part {
        Part::One => {
            lefts.sort_unstable();
            rights.sort_unstable();
            zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>()
        }
        Part::Two => {
            let counts = rights.into_iter().counts();
            lefts.iter().map(|left| left * counts.get(left).copied().unwrap_or(0) as i64).sum()
        }
    };
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "11");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "31");
    }

    #[test]
    fn rejects_lines_with_one_column() {
        assert!(solve(Part::One, "3 4\n5\n", &Settings::EXAMPLE).is_err());
    }
}
