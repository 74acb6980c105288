use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use verdant::{AppConfig, HeadlessRunner};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (RON); defaults to ./verdant.ron when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for terrain and behavior (random when unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds per tick
    #[arg(long)]
    dt: Option<f32>,

    /// Log a census report every N ticks
    #[arg(long)]
    report_every: Option<u64>,

    /// Write a RON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,

    /// Default log level to debug (RUST_LOG still wins)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = AppConfig::load(args.config.as_deref())?;

    // Layer 4: command-line overrides
    if let Some(seed) = args.seed {
        config.ecosystem.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        config.run.dt = dt;
    }
    if let Some(report_every) = args.report_every {
        config.run.report_every = report_every;
    }
    config.validate()?;

    if args.print_config {
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())?;
        println!("{}", text);
        return Ok(());
    }

    let mut runner = HeadlessRunner::new(config)?;
    let summary = runner.run();

    log::info!(
        "Finished after {} ticks ({:.1}s): {}",
        summary.ticks,
        summary.elapsed,
        summary.final_census
    );
    log::info!(
        "Births {}, deaths {:?}, kills {:?}",
        summary.births,
        summary.deaths,
        summary.kills
    );

    if let Some(path) = args.summary {
        summary.write_ron(&path)?;
    }

    Ok(())
}
