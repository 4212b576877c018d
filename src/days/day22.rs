//! Day 22: Monkey Market.

use crate::parsing::num;
use crate::{Part, Result, Settings};

const ROUNDS: usize = 2000;
/// Price changes lie in -9 ..= 9, so four of them fit in 19^4 slots.
const WINDOWS: usize = 19 * 19 * 19 * 19;

fn next_secret(mut secret: u64) -> u64 {
    const PRUNE: u64 = 16_777_216;
    secret = (secret ^ secret << 6) % PRUNE;
    secret = (secret ^ secret >> 5) % PRUNE;
    (secret ^ secret << 11) % PRUNE
}

/// Adds each window's first sale price for one buyer into `bananas`.
fn tally(mut secret: u64, buyer: u32, bananas: &mut [u64], last_buyer: &mut [u32]) {
    let mut window = 0;
    let mut price = secret % 10;
    for round in 0 .. ROUNDS {
        secret = next_secret(secret);
        let next = secret % 10;
        window = (window * 19 + (next + 9 - price) as usize) % WINDOWS;
        price = next;
        if round >= 3 && last_buyer[window] != buyer {
            last_buyer[window] = buyer;
            bananas[window] += price;
        }
    }
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let secrets = input.split_whitespace().map(num).collect::<Result<Vec<u64>>>()?;
    let answer = match part {
        Part::One => secrets.iter().map(|&s| (0 .. ROUNDS).fold(s, |s, _| next_secret(s))).sum(),
        Part::Two => {
            let mut bananas = vec![0; WINDOWS];
            let mut last_buyer = vec![u32::MAX; WINDOWS];
            for (buyer, &secret) in secrets.iter().enumerate() {
                tally(secret, buyer as u32, &mut bananas, &mut last_buyer);
            }
            bananas.into_iter().max().unwrap_or(0)
        }
    };
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn secret_sequence() {
        let secrets = std::iter::successors(Some(123), |&s| Some(next_secret(s))).skip(1).take(5).collect::<Vec<_>>();
        assert_eq!(secrets, vec![15887950, 16495136, 527345, 704524, 1553684]);
    }

    #[test]
    fn example() {
        assert_eq!(solve(Part::One, "1\n10\n100\n2024\n", &Settings::EXAMPLE).unwrap(), "37327623");
        assert_eq!(solve(Part::Two, "1\n2\n3\n2024\n", &Settings::EXAMPLE).unwrap(), "23");
    }
}
