//! Day 3: Mull It Over.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::num;
use crate::{Part, Result, Settings};

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("valid regex")
});

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let mut enabled = true;
    let mut total = 0u64;
    for m in INSTRUCTION.captures_iter(input) {
        match &m[0] {
            "do()" => enabled = true,
            "don't()" => enabled = part == Part::One,
            _ if enabled => total += num::<u64>(&m[1])? * num::<u64>(&m[2])?,
            _ => {}
        }
    }
    Ok(total.to_string())
}
