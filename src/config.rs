//! Where inputs come from and the few puzzle parameters that differ between
//! the published examples and the full puzzle inputs.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{PuzzleError, Result};

/// Puzzle parameters that are not part of the input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Width and height of the robots' wrapping area (day 14).
    pub area: (i64, i64),
    /// Largest coordinate of the memory space (day 18).
    pub memory_size: i32,
    /// Number of bytes fallen before the first path search (day 18).
    pub fallen_bytes: usize,
    /// Smallest number of picoseconds a cheat must save to be counted (day 20).
    pub min_saving: usize,
}

impl Settings {
    pub const FULL: Settings = Settings {area: (101, 103), memory_size: 70, fallen_bytes: 1024, min_saving: 100};
    pub const EXAMPLE: Settings = Settings {area: (11, 7), memory_size: 6, fallen_bytes: 12, min_saving: 50};

    pub fn for_input(source: &InputSource) -> Self {
        if source.is_example() {Settings::EXAMPLE} else {Settings::FULL}
    }
}

impl Default for Settings {
    fn default() -> Self {Settings::FULL}
}

/// Resolves which file holds a day's input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// `day<N>.in` inside a directory.
    Full {dir: PathBuf, day: usize},
    /// `day<N>test<T>.in` inside a directory.
    Example {dir: PathBuf, day: usize, test: usize},
    /// An explicit file.
    File(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> PathBuf {
        match self {
            InputSource::Full {dir, day} => dir.join(format!("day{day}.in")),
            InputSource::Example {dir, day, test} => dir.join(format!("day{day}test{test}.in")),
            InputSource::File(path) => path.clone(),
        }
    }

    pub fn is_example(&self) -> bool {matches!(self, InputSource::Example {..})}

    pub fn read(&self) -> Result<String> {
        let path = self.path();
        info!("reading {}", path.display());
        read_input(&path)
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {path: path.to_owned(), source})
}

/// Parses the `<W>x<H>` form used on the command line for day 14's area.
pub fn parse_area(text: &str) -> std::result::Result<(i64, i64), String> {
    let (w, h) = text.split_once(['x', 'X']).ok_or_else(|| format!("expected WIDTHxHEIGHT, got {text:?}"))?;
    let parse = |n: &str| n.trim().parse::<i64>().map_err(|e| format!("{n:?}: {e}"));
    match (parse(w)?, parse(h)?) {
        (w, h) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(format!("area must be positive, got {text:?}")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_names_follow_the_day_convention() {
        let full = InputSource::Full {dir: "inputs".into(), day: 16};
        let example = InputSource::Example {dir: "inputs".into(), day: 16, test: 2};
        assert_eq!(full.path(), Path::new("inputs/day16.in"));
        assert_eq!(example.path(), Path::new("inputs/day16test2.in"));
        assert_eq!(InputSource::File("x.txt".into()).path(), Path::new("x.txt"));
    }

    #[test]
    fn examples_get_example_settings() {
        let example = InputSource::Example {dir: ".".into(), day: 14, test: 1};
        assert_eq!(Settings::for_input(&example), Settings::EXAMPLE);
        assert_eq!(Settings::for_input(&InputSource::Full {dir: ".".into(), day: 14}), Settings::FULL);
    }

    #[test]
    fn missing_files_name_the_path() {
        let err = InputSource::File("no/such/file.in".into()).read().unwrap_err();
        assert_eq!(err.to_string(), "cannot read no/such/file.in");
    }

    #[test]
    fn area_parsing() {
        assert_eq!(parse_area("101x103"), Ok((101, 103)));
        assert_eq!(parse_area("11X7"), Ok((11, 7)));
        assert!(parse_area("11").is_err());
        assert!(parse_area("0x7").is_err());
    }
}
