//! Pipemaze CLI - solve a pipe-loop puzzle file.
//!
//! Prints each diagnostic rendering followed by the answer and the time
//! it took.

use clap::{Parser, ValueEnum};
use pipemaze::{read_input, solve_part_a, solve_part_b, OrientationPolicy, Solution, SolverConfig};
use pipemaze::{logging, SolveError};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationArg {
    /// Decide from the traced loop's signed area
    Auto,
    /// Read kernels as for a clockwise walk
    Clockwise,
    /// Read kernels as for a counter-clockwise walk
    CounterClockwise,
}

impl From<OrientationArg> for OrientationPolicy {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Auto => OrientationPolicy::Auto,
            OrientationArg::Clockwise => OrientationPolicy::Clockwise,
            OrientationArg::CounterClockwise => OrientationPolicy::CounterClockwise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Half the loop length
    A,
    /// Number of enclosed tiles
    B,
    /// Both answers
    Both,
}

#[derive(Parser)]
#[command(name = "pipemaze")]
#[command(about = "Trace the pipe loop in a tile grid and count the tiles it encloses", long_about = None)]
struct Args {
    /// Puzzle input file
    #[arg(default_value = "input/10.txt")]
    input: PathBuf,

    /// Which answer to compute
    #[arg(long, value_enum, default_value = "both")]
    part: Part,

    /// Skip the grid renderings
    #[arg(long)]
    no_render: bool,

    /// How to read the enclosure kernels
    #[arg(long, value_enum, default_value = "auto")]
    orientation: OrientationArg,
}

/// Failures the CLI reports before exiting.
#[derive(Debug)]
enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Reading or solving the puzzle failed
    Solve(SolveError),
}

impl CliError {
    /// Print the error and its causes, then exit with status 1.
    fn exit(&self) -> ! {
        eprintln!("Error: {self}");
        let mut cause = self.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {err}");
            cause = err.source();
        }
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Solve(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::LoggingInit(_) => None,
            CliError::Solve(e) => e.source(),
        }
    }
}

impl From<SolveError> for CliError {
    fn from(e: SolveError) -> Self {
        CliError::Solve(e)
    }
}

fn report(
    label: &str,
    solve: impl FnOnce() -> Result<Solution, SolveError>,
) -> Result<(), CliError> {
    let started = Instant::now();
    let solution = solve()?;
    if let Some(rendering) = &solution.rendering {
        println!("{rendering}");
    }
    println!("Solution for part {label}: {}", solution.answer);
    println!("solution took {} milliseconds", started.elapsed().as_millis());
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    logging::init_logging("warn").map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let input = read_input(&args.input)?;
    let config = SolverConfig {
        render: !args.no_render,
        orientation: args.orientation.into(),
    };

    if matches!(args.part, Part::A | Part::Both) {
        report("A", || solve_part_a(&input, &config))?;
    }
    if matches!(args.part, Part::B | Part::Both) {
        report("B", || solve_part_b(&input, &config))?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        e.exit();
    }
}
