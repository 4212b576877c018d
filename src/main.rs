use std::path::PathBuf;
use std::time::Instant;

use advent2024::config::parse_area;
use advent2024::{InputSource, Part, Settings};
use clap::Parser;
use log::info;

/// Runs one day of the 2024 Advent of Code puzzles.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Day number, 1 to 25
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 25))]
    day: u8,
    /// 1 or 2; both parts run when omitted
    part: Option<Part>,
    /// Read the day's example number N (`day<DAY>test<N>.in`) instead of the full input
    #[arg(short, long, value_name = "N")]
    test: Option<usize>,
    /// Read this file instead of resolving one by day
    #[arg(short, long, conflicts_with = "test")]
    input: Option<PathBuf>,
    /// Directory holding the `day<N>.in` files
    #[arg(long, env = "ADVENT_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,
    /// Robot area for day 14, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_area)]
    area: Option<(i64, i64)>,
    /// Largest memory coordinate for day 18
    #[arg(long)]
    memory_size: Option<i32>,
    /// Bytes fallen before the day 18 path search
    #[arg(long)]
    fallen_bytes: Option<usize>,
    /// Minimum picoseconds a day 20 cheat must save
    #[arg(long)]
    min_saving: Option<usize>,
}

impl Cli {
    fn source(&self) -> InputSource {
        let day = self.day as usize;
        match (&self.input, self.test) {
            (Some(path), _) => InputSource::File(path.clone()),
            (None, Some(test)) => InputSource::Example {dir: self.input_dir.clone(), day, test},
            (None, None) => InputSource::Full {dir: self.input_dir.clone(), day},
        }
    }

    fn settings(&self, source: &InputSource) -> Settings {
        let mut settings = Settings::for_input(source);
        if let Some(area) = self.area {settings.area = area}
        if let Some(size) = self.memory_size {settings.memory_size = size}
        if let Some(bytes) = self.fallen_bytes {settings.fallen_bytes = bytes}
        if let Some(saving) = self.min_saving {settings.min_saving = saving}
        settings
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let source = cli.source();
    let settings = cli.settings(&source);
    let input = source.read()?;
    let parts = match cli.part {Some(part) => vec![part], None => Part::BOTH.to_vec()};
    for part in parts {
        let time = Instant::now();
        println!("{}", advent2024::solve(cli.day as usize, part, &input, &settings)?);
        info!("day {} part {part}: {} seconds elapsed", cli.day, time.elapsed().as_secs_f32());
    }
    Ok(())
}
