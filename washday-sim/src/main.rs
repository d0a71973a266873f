//! Wash Day driver
//!
//! Replays a command script against the laundry game, ticking the wash
//! cycle at the configured cadence and printing each snapshot.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use washday_core::ManualClock;
use washday_sim::script::DEMO_SCRIPT;
use washday_sim::{
    logging, parse_script, Command, Driver, OutputFormat, Pacer, Renderer, RunStats,
    SystemClock, WashConfig,
};

#[derive(Parser, Debug)]
#[command(name = "washday", version, about = "Replay a scripted Wash Day session")]
struct Args {
    /// Machine configuration (TOML); defaults to the embedded washday.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command script; defaults to the built-in demo
    #[arg(long)]
    script: Option<PathBuf>,

    /// Advance a simulated clock instead of sleeping
    #[arg(long)]
    simulated: bool,

    /// Write COBS-framed postcard snapshots instead of text
    #[arg(long)]
    frames: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = WashConfig::load(args.config.as_deref()).context("loading configuration")?;

    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => DEMO_SCRIPT.to_owned(),
    };
    let commands = parse_script(&script).context("parsing script")?;

    let format = if args.frames {
        OutputFormat::Frames
    } else {
        OutputFormat::Text
    };

    info!(
        commands = commands.len(),
        tick_interval_ms = config.tick_interval_ms(),
        simulated = args.simulated,
        "starting session"
    );

    let stdout = io::stdout().lock();
    let stats = if args.simulated {
        let clock = ManualClock::new(0);
        run(&clock, &config, &commands, Renderer::new(stdout, format))?
    } else {
        let clock = SystemClock::new();
        run(&clock, &config, &commands, Renderer::new(stdout, format))?
    };

    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        ticks = stats.ticks,
        completed_washes = stats.completed_washes,
        "session finished"
    );
    Ok(())
}

fn run<P: Pacer, W: Write>(
    pacer: &P,
    config: &WashConfig,
    commands: &[Command],
    renderer: Renderer<W>,
) -> Result<RunStats> {
    let mut driver = Driver::new(
        pacer,
        config.catalog()?,
        config.durations()?,
        config.tick_interval_ms(),
        renderer,
    );
    driver.run(commands).context("writing snapshots")
}
