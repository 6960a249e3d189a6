use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use voxelgrid::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (defaults to the configured seed, then the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value = "0.016666668")]
    dt: f32,

    /// RON worldgen preset replacing the configured generation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the generated grid as ASCII after the run
    #[arg(long)]
    print_map: bool,

    /// Print the effective worldgen preset as RON and exit
    #[arg(long)]
    dump_worldgen: bool,

    /// Hold right (and hop now and then) for the whole run
    #[arg(long)]
    walk: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = SimConfig::load()?;
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read worldgen preset {}", path.display()))?;
        config.worldgen = WorldGenConfig::from_ron(&text)
            .with_context(|| format!("Invalid worldgen preset {}", path.display()))?;
        log::info!("Loaded worldgen preset '{}' from {:?}", config.worldgen.name, path);
    }
    config.validate()?;

    if args.dump_worldgen {
        println!("{}", config.worldgen.to_ron()?);
        return Ok(());
    }

    let seed = args.seed.or(config.seed).unwrap_or_else(time_seed);
    log::info!("Starting voxelgrid with seed {}", seed);

    let mut world = World::generate(config, seed);
    let start = world.player.position();
    let mut removed = 0;
    let mut broken = 0;

    for tick in 0..args.ticks {
        let input = InputState {
            right: args.walk,
            jump: args.walk && tick % 30 == 0,
            ..InputState::default()
        };
        let report = world.tick(&input, args.dt);
        removed += report.animals_removed;
        if report.interaction.broken.is_some() {
            broken += 1;
        }
    }

    let player = world.render_player();
    log::info!(
        "Ran {} ticks ({:.1}s): player {:?} -> {:?}, grounded: {}, submerged: {}",
        world.ticks(),
        world.time(),
        start,
        player.position,
        player.grounded,
        player.submerged
    );
    log::info!(
        "Animals alive: {}/{} ({} removed), blocks broken: {}",
        world.creatures.count(),
        world.creatures.capacity(),
        removed,
        broken
    );

    let histogram = world.grid().histogram();
    for block in Block::ALL {
        let count = histogram[block.id() as usize];
        if count > 0 {
            log::info!("  {:<12} {}", block.name(), count);
        }
    }

    if args.print_map {
        println!("{}", world.grid().to_ascii());
    }

    Ok(())
}

/// Seed from the wall clock, used only when none was configured
fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp() as u64 ^ now.timestamp_subsec_nanos() as u64
}
