use orbitview::Scenario;
use orbitview::run_2d;
use orbitview::{bench_gravity, bench_frame_curve};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Print force and frame timings instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_frame_curve();
        return Ok(());
    }

    let scenario_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let simulation = Scenario::load(&scenario_path)?;

    run_2d(simulation);
    Ok(())
}
