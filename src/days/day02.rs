//! Day 2: Red-Nosed Reports.

use itertools::Itertools;

use crate::parsing::num;
use crate::{Part, Result, Settings};

fn is_safe(levels: &[i64]) -> bool {
    let diffs = levels.iter().tuple_windows().map(|(a, b)| b - a);
    diffs.clone().all(|d| (1 ..= 3).contains(&d)) || diffs.clone().all(|d| (-3 ..= -1).contains(&d))
}

/// Safe outright, or safe once any single level is dropped.
fn is_dampened_safe(levels: &[i64]) -> bool {
    is_safe(levels) || (0 .. levels.len()).any(|skip| {
        let rest = levels.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &l)| l).collect_vec();
        is_safe(&rest)
    })
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let reports = input.trim().lines()
        .map(|line| line.split_whitespace().map(num::<i64>).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    let check = match part {Part::One => is_safe, Part::Two => is_dampened_safe};
    Ok(reports.iter().filter(|levels| check(levels)).count().to_string())
}
