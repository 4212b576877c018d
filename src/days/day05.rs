//! Day 5: Print Queue.

use bitvec::prelude::*;

use crate::parsing::{blocks, num, pair};
use crate::{Part, PuzzleError, Result, Settings};

/// Page numbers are two digits, so a rule `x|y` is bit `100 * x + y`.
struct Rules(BitArr!(for 10000));

impl Rules {
    fn parse(text: &str) -> Result<Self> {
        let mut rules = bitarr![0; 10000];
        for line in text.lines() {
            let (x, y) = pair(line, "|")?;
            rules.set(Rules::index(num(x)?, num(y)?)?, true);
        }
        Ok(Rules(rules))
    }

    fn index(x: usize, y: usize) -> Result<usize> {
        if x < 100 && y < 100 {Ok(100 * x + y)}
        else {Err(PuzzleError::malformed(format!("page numbers must be below 100, got {x}|{y}")))}
    }

    fn before(&self, x: usize, y: usize) -> bool {self.0[100 * x + y]}

    /// Repeatedly takes a page that no remaining page must precede.
    fn reordered(&self, update: &[usize]) -> Result<Vec<usize>> {
        let mut unsorted = update.to_vec();
        let mut sorted = Vec::with_capacity(unsorted.len());
        while !unsorted.is_empty() {
            let at = unsorted.iter().position(|&x| unsorted.iter().all(|&y| !self.before(y, x)))
                .ok_or_else(|| PuzzleError::malformed(format!("rules for {update:?} form a cycle")))?;
            sorted.push(unsorted.swap_remove(at));
        }
        Ok(sorted)
    }

    fn is_ordered(&self, update: &[usize]) -> bool {
        (0 .. update.len()).all(|i| (i + 1 .. update.len()).all(|j| !self.before(update[j], update[i])))
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let blocks = blocks(input);
    let [rules, updates] = &blocks[..] else {
        return Err(PuzzleError::malformed("expected rules and updates separated by a blank line"));
    };
    let rules = Rules::parse(rules)?;
    let updates = updates.lines()
        .map(|line| line.split(',').map(num::<usize>).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    for update in &updates {
        if update.iter().any(|&page| page >= 100) {
            return Err(PuzzleError::malformed(format!("page numbers must be below 100 in {update:?}")));
        }
    }

    let total: usize = match part {
        Part::One => updates.iter().filter(|update| rules.is_ordered(update)).map(|u| u[u.len() / 2]).sum(),
        Part::Two => updates.iter()
            .filter(|update| !rules.is_ordered(update))
            .map(|update| rules.reordered(update).map(|sorted| sorted[sorted.len() / 2]))
            .sum::<Result<usize>>()?,
    };
    Ok(total.to_string())
}
