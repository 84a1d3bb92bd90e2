use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about = "Advent of Code 2022, days 1 to 14")]
struct Args {
    /// Day number
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 14))]
    day: u8,

    /// Puzzle part, 1 or 2
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: u8,

    /// Solve `day{DAY}test{TEST}.in` instead of `day{DAY}.in`
    #[arg(long)]
    test: Option<u32>,

    /// Directory holding the input files
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    aoc2022::logging::init();
    let args = Args::parse();

    let fname = match args.test {
        Some(test) => format!("day{}test{}.in", args.day, test),
        None => format!("day{}.in", args.day),
    };
    let path = args.input_dir.join(fname);
    debug!(path = %path.display(), day = args.day, part = args.part, "reading input");
    let input = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;

    let time = std::time::Instant::now();
    let answer = aoc2022::solve(args.day.into(), args.part, &input)
        .with_context(|| format!("day {} part {}", args.day, args.part))?;
    println!("{}", answer);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
