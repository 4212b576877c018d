//! Small parsing helpers shared by the puzzle days.

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PuzzleError, Result};

static SIGNED_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("valid regex"));

/// Parses a whole (trimmed) token as a number.
pub fn num<T: FromStr<Err = ParseIntError>>(text: &str) -> Result<T> {
    let text = text.trim();
    text.parse().map_err(|source| PuzzleError::BadNumber {text: text.to_owned(), source})
}

/// Every (possibly negative) integer embedded in `text`, in order.
pub fn ints(text: &str) -> Result<Vec<i64>> {
    SIGNED_INT.find_iter(text).map(|m| num(m.as_str())).collect()
}

/// Splits `text` on blank lines, tolerating `\r\n` line endings.
pub fn blocks(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    text.trim().split("\n\n").map(str::to_owned).collect()
}

/// Splits a line into exactly two parts around `sep`.
pub fn pair<'a>(line: &'a str, sep: &str) -> Result<(&'a str, &'a str)> {
    line.split_once(sep).ok_or_else(|| PuzzleError::malformed(format!("expected {sep:?} in {line:?}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ints_keeps_signs() {
        assert_eq!(ints("p=0,4 v=3,-3").unwrap(), vec![0, 4, 3, -3]);
        assert_eq!(ints("Button A: X+94, Y+34").unwrap(), vec![94, 34]);
    }

    #[test]
    fn num_reports_the_offending_text() {
        let err = num::<u32>("12a").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse \"12a\" as a number");
    }

    #[test]
    fn blocks_handles_crlf() {
        assert_eq!(blocks("a\r\nb\r\n\r\nc\r\n"), vec!["a\nb".to_owned(), "c".to_owned()]);
    }
}
