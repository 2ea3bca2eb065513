mod input;
mod render;

use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use common::{Disk, solve};
use tracing_subscriber::{EnvFilter, fmt};

use crate::render::Report;

/// Tower of Hanoi where no disk may rest on a smaller disk or on a disk of
/// its own color.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(version)]
#[command(about = "Solve the Tower of Hanoi under a same-color stacking restriction")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Refuse towers with more disks than this
    #[arg(long, default_value_t = 20, global = true)]
    max_disks: usize,

    /// Print the outcomes as JSON instead of drawing them
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a tower given as size:color tokens, bottom disk first
    Solve {
        #[arg(value_name = "DISK", required_unless_present = "file", conflicts_with = "file")]
        disks: Vec<Disk>,

        /// Read the tower from a JSON list of {"size": .., "color": ..} objects
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Solve the built-in example towers
    Demo,
    /// Solve a tower with strictly decreasing sizes and random colors
    Random {
        /// Number of disks in the tower
        #[arg(long)]
        disks: usize,

        /// Draw colors from the first N palette entries
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
        colors: u8,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn towers(command: &Command, max_disks: usize) -> anyhow::Result<Vec<(String, Vec<Disk>)>> {
    let towers = match command {
        Command::Solve { disks, file } => {
            let disks = match file {
                Some(path) => input::read_disks(path)?,
                None => disks.clone(),
            };
            vec![("input".to_string(), disks)]
        }
        Command::Demo => input::demo_towers(),
        Command::Random {
            disks,
            colors,
            seed,
        } => {
            // refuse before building the tower
            if *disks > max_disks {
                bail!(
                    "random tower of {disks} disks is more than the limit of {max_disks} \
                     (see --max-disks)"
                );
            }
            vec![(
                format!("random tower (seed {seed})"),
                input::random_tower(*disks, *colors as usize, *seed)?,
            )]
        }
    };

    Ok(towers)
}

/// Solve every requested tower and print the reports. Returns whether all of
/// them were solvable.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let towers = towers(&cli.command, cli.max_disks)?;

    for (name, disks) in &towers {
        if disks.len() > cli.max_disks {
            bail!(
                "{name} has {} disks, more than the limit of {} (see --max-disks)",
                disks.len(),
                cli.max_disks
            );
        }
    }

    let reports: Vec<_> = towers
        .iter()
        .map(|(name, disks)| {
            let outcome = solve(disks);
            log::info!(
                "{name}: {} disks, solved: {}",
                disks.len(),
                outcome.is_solved()
            );
            Report {
                name,
                disks,
                outcome,
            }
        })
        .collect();

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &reports).context("cannot write JSON")?;
        writeln!(stdout)?;
    } else {
        for report in &reports {
            write!(stdout, "{report}")?;
        }
    }

    Ok(reports.iter().all(|r| r.outcome.is_solved()))
}

/// 0 when every tower was solved, 2 if one was infeasible, 1 on errors.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);
    if let Err(e) = &result {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}
