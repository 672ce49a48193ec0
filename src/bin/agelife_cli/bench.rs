use crate::util::group_digits;
use agelife::{Config, Engine, Pattern};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub(super) struct BenchArgs {
    /// Grid width in cells
    #[arg(long, default_value_t = 1024)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 1024)]
    height: usize,

    /// Number of generations to time
    #[arg(short, long, default_value_t = 1000)]
    gens: u64,

    /// RNG seed for the initial grid
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

pub(super) fn run_bench(args: BenchArgs) -> Result<()> {
    let pattern = Pattern::random(args.width, args.height, 320, Some(args.seed));
    let config = Config::new(args.width, args.height).with_pattern(pattern);
    let mut engine = Engine::with_config(&config)?;

    let timer = std::time::Instant::now();
    for _ in 0..args.gens {
        engine.step();
    }
    let elapsed = timer.elapsed().as_secs_f64();

    let cells = args.width as u64 * args.height as u64 * args.gens;
    println!(
        "{}x{}, {} gens: {:.3}s, {} cell updates/s",
        args.width,
        args.height,
        group_digits(args.gens),
        elapsed,
        group_digits((cells as f64 / elapsed) as u64),
    );
    let (young, old) = engine.population();
    println!(
        "final population: {} young, {} old",
        group_digits(young),
        group_digits(old)
    );
    Ok(())
}
