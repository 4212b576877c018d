//! Day 17: Chronospatial Computer.

use itertools::Itertools;
use log::debug;

use crate::parsing::{blocks, ints};
use crate::{Part, PuzzleError, Result, Settings};

/// Guards against programs that never halt.
const STEP_LIMIT: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

/// `a / 2^by`, saturating to zero for huge shifts.
fn shr(a: u64, by: u64) -> u64 {
    u32::try_from(by).ok().and_then(|by| a.checked_shr(by)).unwrap_or(0)
}

/// Makes room for three more low bits, or `None` if the high bits would be lost.
fn widen(a: u64) -> Option<u64> {
    (a.leading_zeros() >= 3).then(|| a << 3)
}

impl Computer {
    fn parse(input: &str) -> Result<Self> {
        let blocks = blocks(input);
        let [registers, program] = &blocks[..] else {
            return Err(PuzzleError::malformed("expected registers and a program separated by a blank line"));
        };
        let [a, b, c] = ints(registers)?[..] else {
            return Err(PuzzleError::malformed(format!("expected three registers in {registers:?}")));
        };
        let program = ints(program)?.into_iter()
            .map(|n| u8::try_from(n).ok().filter(|&n| n < 8)
                .ok_or_else(|| PuzzleError::malformed(format!("{n} is not a 3-bit number"))))
            .collect::<Result<Vec<_>>>()?;
        let register = |n: i64| u64::try_from(n).map_err(|_| PuzzleError::malformed(format!("negative register {n}")));
        Ok(Computer {registers: [register(a)?, register(b)?, register(c)?], program})
    }

    fn run(&self, a: u64) -> Result<Vec<u8>> {
        let [_, mut b, mut c] = self.registers;
        let mut a = a;
        let mut ip = 0;
        let mut out = vec![];
        for _ in 0 .. STEP_LIMIT {
            let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1)) else {
                return Ok(out);
            };
            let literal = operand as u64;
            let combo = match operand {0 ..= 3 => Some(literal), 4 => Some(a), 5 => Some(b), 6 => Some(c), _ => None};
            let combo = || combo.ok_or_else(|| PuzzleError::malformed(format!("combo operand 7 at {ip}")));
            match opcode {
                0 => a = shr(a, combo()?),
                1 => b ^= literal,
                2 => b = combo()? & 7,
                3 if a != 0 => {ip = operand as usize; continue}
                3 => {}
                4 => b ^= c,
                5 => out.push((combo()? & 7) as u8),
                6 => b = shr(a, combo()?),
                _ => c = shr(a, combo()?),
            }
            ip += 2;
        }
        Err(PuzzleError::NoSolution(format!("program did not halt within {STEP_LIMIT} steps")))
    }

    /// Smallest `A` that makes the program print itself.
    ///
    /// Every output digit depends on `A` shifted right by three bits per loop
    /// iteration, so the tail of the program pins down the high bits of `A`:
    /// extend each candidate by three bits at a time, keeping those whose output
    /// matches a longer suffix of the program.
    fn quine(&self) -> Result<Option<u64>> {
        let mut candidates = vec![0u64];
        for from in (0 .. self.program.len()).rev() {
            let suffix = &self.program[from ..];
            let mut next = vec![];
            for &high in &candidates {
                let high = widen(high).ok_or_else(|| {
                    PuzzleError::malformed(format!("a {}-value program does not fit in a 64-bit register", self.program.len()))
                })?;
                for low in 0 .. 8 {
                    let a = high | low;
                    if self.run(a)? == suffix {next.push(a)}
                }
            }
            debug!("{} candidates reproduce the last {} values", next.len(), suffix.len());
            candidates = next;
        }
        Ok(candidates.into_iter().filter(|&a| a > 0).min())
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let computer = Computer::parse(input)?;
    match part {
        Part::One => Ok(computer.run(computer.registers[0])?.iter().join(",")),
        Part::Two => computer.quine()?
            .map(|a| a.to_string())
            .ok_or_else(|| PuzzleError::NoSolution("no value of A makes the program print itself".into())),
    }
}
