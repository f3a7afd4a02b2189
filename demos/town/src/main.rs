//! town — headless runner for the landmark-seeking agent simulation.
//!
//! Loads a map and an agent file (or the built-in town), runs every agent
//! through its target list and home again, and writes CSV output.
//!
//! ```text
//! RUST_LOG=info cargo run -p town -- --seed 7 --output output/town
//! ```

mod town;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lm_core::SimConfig;
use lm_output::{CsvWriter, SimOutputObserver};
use lm_scenario::Scenario;
use lm_sim::SimBuilder;

#[derive(Parser, Debug)]
#[command(name = "town")]
#[command(about = "Run landmark-seeking agents on a grid map until they are all home")]
struct Args {
    /// Map file (`~` descriptions, then `M` and the grid rows)
    #[arg(long, requires = "agents")]
    map: Option<PathBuf>,

    /// Agent file (agent numbers, each followed by its target categories)
    #[arg(long, requires = "map")]
    agents: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks even if agents are still out
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Write agent positions every N ticks (0 disables)
    #[arg(long, default_value_t = 10)]
    snapshot_every: u64,

    /// Directory for CSV output
    #[arg(long, default_value = "output/town")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Scenario.
    let scenario = match (&args.map, &args.agents) {
        (Some(map), Some(agents)) => Scenario::load(map, agents)
            .with_context(|| format!("loading {} and {}", map.display(), agents.display()))?,
        _ => Scenario::parse(town::MAP, town::AGENTS).context("parsing the built-in town")?,
    };
    info!(
        columns = scenario.grid.columns(),
        rows    = scenario.grid.rows(),
        agents  = scenario.agents.len(),
        "scenario ready",
    );

    // 2. Sim.
    let mut config = SimConfig::new(args.seed, args.max_ticks);
    config.output_interval_ticks = args.snapshot_every;
    let mut sim = SimBuilder::new(config, scenario.grid, scenario.agents).build()?;

    // 3. Output.
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(&args.output)?);

    // 4. Run.
    let t0 = Instant::now();
    let final_tick = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!(
        "Finished at {final_tick} in {:.3} s, {} of {} agents still out",
        elapsed.as_secs_f64(),
        sim.active_count(),
        sim.agents.len(),
    );
    println!();
    println!(
        "{:<10} {:<6} {:>7} {:>7} {:>7} {:>7} {:>7} {:>9}",
        "Agent", "Home", "Found", "Random", "A*", "Shared", "Blocked", "Points",
    );
    println!("{}", "-".repeat(68));
    for agent in &sim.agents {
        let s = &agent.statistics;
        println!(
            "{:<10} {:<6} {:>7} {:>7} {:>7} {:>7} {:>7} {:>9}",
            agent.name,
            if agent.active { "no" } else { "yes" },
            s.targets_found,
            s.random_moves,
            s.astar_moves,
            s.knowledge_transfers,
            s.blocked_moves,
            s.knowledge_points,
        );
    }
    println!();
    println!("Output written to {}", args.output.display());

    Ok(())
}
