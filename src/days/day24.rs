//! Day 24: Crossed Wires.

use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::parsing::{blocks, pair};
use crate::{Part, PuzzleError, Result, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {And, Or, Xor}

#[derive(Clone, Debug)]
struct Gate<'a> {inputs: [&'a str; 2], op: Op, output: &'a str}

struct Circuit<'a> {
    initial: FxHashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
}

impl<'a> Circuit<'a> {
    fn parse(blocks: &'a [String]) -> Result<Self> {
        let [wires, gates] = blocks else {
            return Err(PuzzleError::malformed("expected wires and gates separated by a blank line"));
        };
        let initial = wires.lines().map(|line| {
            let (wire, value) = pair(line, ":")?;
            match value.trim() {
                "0" => Ok((wire.trim(), false)),
                "1" => Ok((wire.trim(), true)),
                other => Err(PuzzleError::malformed(format!("wire {wire} holds {other:?}"))),
            }
        }).collect::<Result<_>>()?;
        let gates = gates.lines().map(|line| {
            let [a, op, b, "->", output] = line.split_whitespace().collect::<Vec<_>>()[..] else {
                return Err(PuzzleError::malformed(format!("cannot parse gate {line:?}")));
            };
            let op = match op {
                "AND" => Op::And, "OR" => Op::Or, "XOR" => Op::Xor,
                _ => return Err(PuzzleError::malformed(format!("unknown gate {op:?}"))),
            };
            Ok(Gate {inputs: [a, b], op, output})
        }).collect::<Result<_>>()?;
        Ok(Circuit {initial, gates})
    }

    fn value(&self, wire: &'a str, by_output: &FxHashMap<&str, &Gate<'a>>, known: &mut FxHashMap<&'a str, bool>) -> Result<bool> {
        if let Some(&v) = known.get(wire) {return Ok(v)}
        let gate = by_output.get(wire).ok_or_else(|| PuzzleError::malformed(format!("nothing drives wire {wire}")))?;
        // Mark the wire first so that a feedback loop reads false instead of recursing forever.
        known.insert(wire, false);
        let [a, b] = [self.value(gate.inputs[0], by_output, known)?, self.value(gate.inputs[1], by_output, known)?];
        let v = match gate.op {Op::And => a & b, Op::Or => a | b, Op::Xor => a ^ b};
        known.insert(wire, v);
        Ok(v)
    }

    /// The number read from the `z` wires, `z00` being the lowest bit.
    fn output(&self) -> Result<u64> {
        let by_output = self.gates.iter().map(|g| (g.output, g)).collect::<FxHashMap<_, _>>();
        let mut known = self.initial.clone();
        let mut z_wires = self.gates.iter().map(|g| g.output).filter(|w| w.starts_with('z')).collect_vec();
        z_wires.sort_unstable();
        let mut n = 0;
        for (bit, wire) in z_wires.into_iter().enumerate() {
            let mask = u32::try_from(bit).ok().and_then(|bit| 1u64.checked_shl(bit))
                .ok_or_else(|| PuzzleError::malformed("more than 64 z wires"))?;
            if self.value(wire, &by_output, &mut known)? {n |= mask}
        }
        Ok(n)
    }

    /// Outputs that break the shape of a ripple-carry adder:
    /// `z_i = x_i ^ y_i ^ c_i`, `c_(i+1) = (x_i & y_i) | ((x_i ^ y_i) & c_i)`.
    fn misplaced_outputs(&self) -> Vec<&'a str> {
        let is_input = |w: &str| w.starts_with('x') || w.starts_with('y');
        let is_first_bit = |g: &Gate<'_>| g.inputs.iter().all(|w| w.ends_with("00") && is_input(w));
        let last_z = self.gates.iter().map(|g| g.output).filter(|w| w.starts_with('z')).max().unwrap_or("z00");
        let feeds = |wire: &str, op: Op| self.gates.iter().any(|g| g.op == op && g.inputs.iter().any(|&w| w == wire));

        let mut wrong = FxHashSet::default();
        for gate in &self.gates {
            let out = gate.output;
            let from_inputs = gate.inputs.iter().all(|w| is_input(w));
            let misplaced = match gate.op {
                // Every sum bit but the final carry comes out of an XOR.
                _ if out.starts_with('z') && out != last_z && gate.op != Op::Xor => true,
                // The final carry comes out of an OR (unless the adder is a single bit wide).
                _ if out == last_z && gate.op != Op::Or && self.gates.len() > 2 => true,
                // An XOR of carries produces a sum bit; an XOR of inputs feeds another XOR.
                Op::Xor if !from_inputs => !out.starts_with('z'),
                Op::Xor => !is_first_bit(gate) && !feeds(out, Op::Xor),
                // Carry halves are merged by an OR.
                Op::And => !is_first_bit(gate) && !feeds(out, Op::Or),
                Op::Or => false,
            };
            if misplaced {
                debug!("{:?} gate {} {:?} -> {out} is out of place", gate.op, gate.inputs[0], gate.inputs[1]);
                wrong.insert(out);
            }
        }
        wrong.into_iter().sorted().collect()
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let blocks = blocks(input);
    let circuit = Circuit::parse(&blocks)?;
    match part {
        Part::One => Ok(circuit.output()?.to_string()),
        Part::Two => Ok(circuit.misplaced_outputs().join(",")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A `bits`-wide ripple-carry adder computing `x + y`.
    fn adder(bits: usize, x: u64, y: u64) -> String {
        let mut text = String::new();
        for i in 0 .. bits {
            text += &format!("x{i:02}: {}\n", x >> i & 1);
        }
        for i in 0 .. bits {
            text += &format!("y{i:02}: {}\n", y >> i & 1);
        }
        text += "\nx00 XOR y00 -> z00\nx00 AND y00 -> c01\n";
        for i in 1 .. bits {
            let carry_out = if i + 1 == bits {format!("z{bits:02}")} else {format!("c{:02}", i + 1)};
            text += &format!("x{i:02} XOR y{i:02} -> t{i:02}\n");
            text += &format!("t{i:02} XOR c{i:02} -> z{i:02}\n");
            text += &format!("x{i:02} AND y{i:02} -> a{i:02}\n");
            text += &format!("c{i:02} AND t{i:02} -> b{i:02}\n");
            text += &format!("a{i:02} OR b{i:02} -> {carry_out}\n");
        }
        text
    }

    fn swap(text: &str, first: &str, second: &str) -> String {
        text.lines().map(|line| {
            if let Some(inputs) = line.strip_suffix(&format!("-> {first}")) {format!("{inputs}-> {second}")}
            else if let Some(inputs) = line.strip_suffix(&format!("-> {second}")) {format!("{inputs}-> {first}")}
            else {line.to_owned()}
        }).join("\n")
    }

    #[test]
    fn small_example() {
        let input = "x00: 1\nx01: 1\nx02: 1\ny00: 0\ny01: 1\ny02: 0\n\n\
                     x00 AND y00 -> z00\nx01 XOR y01 -> z01\nx02 OR y02 -> z02\n";
        assert_eq!(solve(Part::One, input, &Settings::EXAMPLE).unwrap(), "4");
    }

    #[test]
    fn too_many_output_bits_is_malformed() {
        let gates = (0 ..= 64).map(|i| format!("x00 AND x00 -> z{i:02}\n")).collect::<String>();
        let input = format!("x00: 1\n\n{gates}");
        assert!(matches!(solve(Part::One, &input, &Settings::EXAMPLE), Err(PuzzleError::Malformed(_))));
        let gates = (0 .. 64).map(|i| format!("x00 AND x00 -> z{i:02}\n")).collect::<String>();
        assert_eq!(solve(Part::One, &format!("x00: 1\n\n{gates}"), &Settings::EXAMPLE).unwrap(), u64::MAX.to_string());
    }

    #[test]
    fn adder_adds() {
        assert_eq!(solve(Part::One, &adder(6, 45, 27), &Settings::EXAMPLE).unwrap(), "72");
        assert_eq!(solve(Part::Two, &adder(6, 45, 27), &Settings::EXAMPLE).unwrap(), "");
    }

    #[test]
    fn finds_swapped_outputs() {
        let crossed = swap(&swap(&adder(6, 0, 0), "z03", "a03"), "t04", "b04");
        assert_eq!(solve(Part::Two, &crossed, &Settings::EXAMPLE).unwrap(), "a03,b04,t04,z03");
    }
}
