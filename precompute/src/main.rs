use std::{fs::File, io::Write, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use precompute::survey;

/// Count how many colorings of a tower the recursive transfer can solve.
#[derive(Parser, Debug)]
#[command(name = "precompute")]
struct Args {
    /// Survey towers with 1 up to this many disks
    #[arg(long, default_value_t = 10)]
    max_disks: usize,

    /// Number of palette colors to color the disks with
    #[arg(long, default_value_t = 2)]
    colors: usize,

    /// Write the JSON table here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Progress is only reported from `-v` on.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level(args.verbose))),
        v => EnvFilter::new(log_level(v)),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let stats = survey(args.max_disks, args.colors)?;
    log::info!("surveyed {} tower sizes in {}s", stats.len(), start.elapsed().as_secs_f32());

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &stats)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &stats)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
