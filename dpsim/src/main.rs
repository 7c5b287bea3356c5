use dpsim::{bench_frames, bench_step, run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use bevy::app::AppExit;
use clap::Parser;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Double pendulum with a persistent trace of the second mass")]
struct Args {
    /// YAML scenario file, the built-in pendulum when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run this many frames headless and print timings instead of opening a window
    #[arg(long, value_name = "FRAMES")]
    bench: Option<u64>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let cfg = match &args.file {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    let scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;
    Ok(scenario)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut scenario = load_scenario(&args)?;

    if let Some(frames) = args.bench {
        bench_step(frames);
        bench_frames(&mut scenario, frames);
        return Ok(ExitCode::SUCCESS);
    }

    match run_2d(scenario) {
        AppExit::Success => Ok(ExitCode::SUCCESS),
        AppExit::Error(code) => Ok(ExitCode::from(code.get())),
    }
}
