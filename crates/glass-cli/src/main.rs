// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Glasshouse developer CLI.
//!
//! `steps` compiles a dataset and dumps the resulting step list; `play` runs
//! the playback driver against the terminal with real wall-clock pacing, the
//! CLI acting as the host clock the driver itself never owns.

// A CLI's whole job is stdout.
#![allow(clippy::print_stdout)]

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use glass_core::{
    random_two_digit, Deck, PlaybackDriver, RunState, SortKind, Step, StepTiming, TimerKind,
    TimerToken, Value, STANDARD_VALUES,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glass-cli", version, about = "Glasshouse sort deck inspector and player")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a deck and print its step list
    Steps {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Emit the step list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Play a deck in the terminal under real timers
    Play {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Base step duration in milliseconds
        #[arg(long, default_value_t = 1400)]
        base_ms: u64,
        /// Duration scale factor; 0.5 plays twice as fast
        #[arg(long, default_value_t = 1.0)]
        speed: f32,
    },
}

#[derive(Args, Debug)]
struct DatasetArgs {
    /// Algorithm to compile: bubble, selection, or merge
    #[arg(long, default_value = "bubble")]
    algorithm: SortKind,
    /// Comma-separated input values; defaults to the standard demo dataset
    #[arg(long)]
    values: Option<String>,
    /// Compile `N` random two-digit values instead
    #[arg(long, value_name = "N", conflicts_with = "values")]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl DatasetArgs {
    fn deck(&self) -> Result<Deck> {
        let values = match (&self.values, self.random) {
            (Some(raw), _) => parse_values(raw)?,
            (None, Some(n)) => random_two_digit(n, self.seed),
            (None, None) => STANDARD_VALUES.to_vec(),
        };
        Ok(Deck::compile(self.algorithm.compiler(), &values))
    }
}

fn parse_values(raw: &str) -> Result<Vec<Value>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Value>()
                .with_context(|| format!("invalid value {s:?} in --values"))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Steps { dataset, json } => steps(&dataset, json),
        Command::Play {
            dataset,
            base_ms,
            speed,
        } => {
            let timing = StepTiming::with_base(Duration::from_millis(base_ms)).scaled(speed);
            play(dataset.deck()?, timing)
        }
    }
}

fn steps(dataset: &DatasetArgs, json: bool) -> Result<()> {
    let deck = dataset.deck()?;
    if json {
        println!("{}", serde_json::to_string_pretty(deck.steps())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "step", "detail"]);
    for (index, step) in deck.steps().iter().enumerate() {
        let (kind, detail) = describe(step);
        table.add_row(vec![index.to_string(), kind.to_owned(), detail]);
    }
    println!("{table}");
    println!(
        "{}: {} steps ({} compares, {} swaps, {} writes) over {:?}",
        deck.algorithm(),
        deck.steps().len(),
        deck.compare_count(),
        deck.swap_count(),
        deck.write_count(),
        deck.initial(),
    );
    Ok(())
}

fn describe(step: &Step) -> (&'static str, String) {
    match step {
        Step::Compare { i, j, left, right } => {
            ("compare", format!("[{i}]={left} vs [{j}]={right}"))
        }
        Step::Swap { i, j, left, right } => ("swap", format!("[{i}]={left} <-> [{j}]={right}")),
        Step::Write {
            index,
            value,
            source,
        } => {
            let detail = match source {
                Some(src) => format!("[{index}] <- {value} (from [{src}])"),
                None => format!("[{index}] <- {value}"),
            };
            ("write", detail)
        }
        Step::Mark { index, value } => ("mark", format!("[{index}]={value} locked")),
        Step::MinFound { index, value } => ("min", format!("[{index}]={value} new minimum")),
        Step::Complete { sorted } => ("complete", format!("{sorted:?}")),
    }
}

/// Drives the deck to completion on the calling thread's clock, rendering one
/// line per committed step.
fn play(deck: Deck, timing: StepTiming) -> Result<()> {
    let mut driver = PlaybackDriver::new(deck, timing);
    println!("{}", driver.frame().announcement);
    driver.start();
    render(&driver);

    let mut schedule: Vec<(Instant, TimerToken)> = Vec::new();
    while driver.run_state() == RunState::Running {
        for request in driver.take_scheduled() {
            schedule.push((Instant::now() + request.delay, request.token));
        }
        let Some(next) = schedule
            .iter()
            .enumerate()
            .min_by_key(|(_, (due, _))| *due)
            .map(|(index, _)| index)
        else {
            break;
        };
        let (due, token) = schedule.swap_remove(next);
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        debug!(kind = ?token.kind(), "timer elapsed");
        driver.handle_timer(token);
        if token.kind() == TimerKind::Advance {
            render(&driver);
        }
    }

    Ok(())
}

fn render(driver: &PlaybackDriver) {
    let frame = driver.frame();
    let cells: Vec<String> = frame
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if frame.sorted.contains(&index) {
                format!("[{value}]")
            } else if frame.highlighted.contains(&index) {
                format!("<{value}>")
            } else {
                format!(" {value} ")
            }
        })
        .collect();
    println!("{:>4}  {}  {}", driver.cursor(), cells.join(" "), frame.announcement);
}
