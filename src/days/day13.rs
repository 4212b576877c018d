//! Day 13: Claw Contraption.

use log::debug;

use crate::parsing::{blocks, ints};
use crate::{Part, PuzzleError, Result, Settings};

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug)]
struct Machine {a: (i64, i64), b: (i64, i64), prize: (i64, i64)}

impl Machine {
    fn parse(block: &str) -> Result<Self> {
        let [ax, ay, bx, by, px, py] = ints(block)?[..] else {
            return Err(PuzzleError::malformed(format!("expected six numbers in {block:?}")));
        };
        Ok(Machine {a: (ax, ay), b: (bx, by), prize: (px, py)})
    }

    /// Cheapest (3 per A press, 1 per B press) way to reach the prize, by Cramer's rule.
    fn tokens(&self) -> Option<i64> {
        let ((ax, ay), (bx, by), (px, py)) = (self.a, self.b, self.prize);
        let det = ax * by - ay * bx;
        if det == 0 {
            debug!("buttons of {self:?} are parallel, skipping");
            return None;
        }
        let (a_num, b_num) = (px * by - py * bx, ax * py - ay * px);
        if a_num % det != 0 || b_num % det != 0 {return None}
        let (a, b) = (a_num / det, b_num / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let mut total = 0;
    for block in blocks(input) {
        let mut machine = Machine::parse(&block)?;
        if part == Part::Two {
            machine.prize = (machine.prize.0 + PRIZE_OFFSET, machine.prize.1 + PRIZE_OFFSET);
        }
        total += machine.tokens().unwrap_or(0);
    }
    Ok(total.to_string())
}
