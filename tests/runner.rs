use std::path::PathBuf;

use advent2024::{solve, InputSource, Part, PuzzleError, Settings};
use pretty_assertions::assert_eq;

fn inputs() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("inputs")
}

fn run_example(day: usize, test: usize) -> [String; 2] {
    Part::BOTH.map(|part| run_part(day, test, part))
}

fn run_part(day: usize, test: usize, part: Part) -> String {
    let source = InputSource::Example {dir: inputs(), day, test};
    let settings = Settings::for_input(&source);
    solve(day, part, &source.read().unwrap(), &settings).unwrap()
}

#[test]
fn historian_hysteria() {
    assert_eq!(run_example(1, 1), ["11", "31"]);
}

#[test]
fn examples_use_the_small_area() {
    assert_eq!(run_part(14, 1, Part::One), "12");
    assert_eq!(run_example(18, 1), ["22", "6,1"]);
    assert_eq!(run_part(20, 1, Part::Two), "285");
}

#[test]
fn reindeer_maze() {
    assert_eq!(run_example(16, 1), ["7036", "45"]);
    assert_eq!(run_example(16, 2), ["11048", "64"]);
}

#[test]
fn lan_party_and_code_chronicle() {
    assert_eq!(run_example(23, 1), ["7", "co,de,ka,ta"]);
    assert_eq!(run_part(25, 1, Part::One), "3");
}

#[test]
fn explicit_file_uses_full_settings() {
    let source = InputSource::File(inputs().join("day1test1.in"));
    assert_eq!(Settings::for_input(&source), Settings::FULL);
    assert_eq!(solve(1, Part::One, &source.read().unwrap(), &Settings::FULL).unwrap(), "11");
}

#[test]
fn missing_file_reports_its_path() {
    let source = InputSource::Full {dir: inputs(), day: 99};
    match source.read() {
        Err(PuzzleError::Io {path, ..}) => assert!(path.ends_with("day99.in")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_days_and_parts() {
    assert!(matches!(solve(0, Part::One, "", &Settings::FULL), Err(PuzzleError::UnknownDay(0))));
    assert!(matches!(solve(26, Part::Two, "", &Settings::FULL), Err(PuzzleError::UnknownDay(26))));
    assert!(matches!("3".parse::<Part>(), Err(PuzzleError::InvalidPart(_))));
}

#[test]
fn empty_input_is_malformed_for_every_day() {
    for day in 1 ..= 25 {
        for part in Part::BOTH {
            for input in ["", "\n", "\r\n  \n"] {
                let result = solve(day, part, input, &Settings::EXAMPLE);
                assert!(matches!(result, Err(PuzzleError::Malformed(_))), "day {day} part {part}: {result:?}");
            }
        }
    }
}

#[test]
fn crlf_maze_matches_unix_maze() {
    let source = InputSource::Example {dir: inputs(), day: 16, test: 1};
    let crlf = source.read().unwrap().replace('\n', "\r\n");
    assert_eq!(solve(16, Part::One, &crlf, &Settings::EXAMPLE).unwrap(), "7036");
    assert_eq!(solve(16, Part::Two, &crlf, &Settings::EXAMPLE).unwrap(), "45");
}
