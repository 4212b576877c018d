//! Day 7: Bridge Repair.

use crate::parsing::{num, pair};
use crate::{Part, Result, Settings};

/// Works backwards from the target: undoing `+`, `*` and `||` for the last operand.
fn reachable(target: u64, operands: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {return false};
    if rest.is_empty() {return target == last}
    if target >= last && reachable(target - last, rest, concat) {return true}
    // Multiplying by zero gives zero whatever the rest evaluates to.
    if last == 0 {
        if target == 0 {return true}
    } else if target % last == 0 && reachable(target / last, rest, concat) {
        return true;
    }
    if concat {
        let decade = 10u64.pow(last.checked_ilog10().unwrap_or(0) + 1);
        if target % decade == last && reachable(target / decade, rest, concat) {return true}
    }
    false
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let mut total = 0;
    for line in input.trim().lines() {
        let (target, operands) = pair(line, ":")?;
        let target: u64 = num(target)?;
        let operands = operands.split_whitespace().map(num).collect::<Result<Vec<u64>>>()?;
        if reachable(target, &operands, part == Part::Two) {total += target}
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, EXAMPLE, &Settings::EXAMPLE).unwrap(), "3749");
        assert_eq!(solve(Part::Two, EXAMPLE, &Settings::EXAMPLE).unwrap(), "11387");
    }

    #[test]
    fn concatenation_is_left_to_right() {
        assert!(reachable(156, &[15, 6], true));
        assert!(!reachable(156, &[15, 6], false));
        assert!(reachable(7290, &[6, 8, 6, 15], true));
    }

    #[test]
    fn zero_operands() {
        assert_eq!(solve(Part::One, "5: 0 5
", &Settings::EXAMPLE).unwrap(), "5");
        assert_eq!(solve(Part::One, "0: 3 0
", &Settings::EXAMPLE).unwrap(), "0");
        assert!(reachable(0, &[3, 0], false));
        assert!(reachable(7, &[7, 0, 1], false));
        assert!(reachable(0, &[0, 0], false));
        assert!(!reachable(4, &[3, 0], false));
        assert!(reachable(30, &[3, 0], true));
        assert!(reachable(5, &[0, 5], true));
    }
}
