//! Text driver: run the reference profile and print the world every tick.
//!
//! Usage: `cargo run -p horde-bench --example text_run -- [TICKS] [SEED]`
//!
//! Set `RUST_LOG=debug` to see per-tick timings.

use std::error::Error;

use clap::Parser;
use horde_bench::reference_profile;
use horde_engine::Apocalypse;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to run.
    #[arg(default_value_t = 20)]
    ticks: u64,

    /// Seed for the agent layout and tie-breaking.
    #[arg(default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut world = Apocalypse::new(reference_profile(args.seed))?;
    println!("tick {}\n{world}", world.current_tick());

    for _ in 0..args.ticks {
        let metrics = world.step()?;
        let (humans_moved, zombies_moved, total_us) =
            (metrics.humans_moved, metrics.zombies_moved, metrics.total_us);
        println!(
            "tick {} (humans moved {humans_moved}, zombies moved {zombies_moved}, {total_us}us)\n{world}",
            world.current_tick(),
        );
    }
    Ok(())
}
