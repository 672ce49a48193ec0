use crate::util::status_line;
use agelife::{Config, Engine, Pattern};
use anyhow::{anyhow, Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    /// Grid width in cells
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    height: usize,

    /// Named starter pattern: line, fountain or hook
    #[arg(short, long)]
    pattern: Option<String>,

    /// Path to a pattern file, one `y x tokens` stroke per line
    #[arg(short, long, conflicts_with = "pattern")]
    file: Option<String>,

    /// Seed a random grid with roughly N/1000 of the cells live
    #[arg(long, conflicts_with_all = ["pattern", "file"])]
    fill_permille: Option<u32>,

    /// RNG seed for --fill-permille; omit for a fresh grid every run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 1)]
    gens: u64,

    /// Print every intermediate frame instead of only the final one
    #[arg(long)]
    trace: bool,
}

pub(super) fn run_run(args: RunArgs) -> Result<()> {
    let pattern = if let Some(name) = &args.pattern {
        Some(Pattern::named(name).ok_or_else(|| anyhow!("unknown pattern {:?}", name))?)
    } else if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        Some(Pattern::parse(&text)?)
    } else {
        args.fill_permille
            .map(|fill| Pattern::random(args.width, args.height, fill, args.seed))
    };

    let mut config = Config::new(args.width, args.height);
    if let Some(pattern) = pattern {
        config = config.with_pattern(pattern);
    }
    let mut engine = Engine::with_config(&config)?;

    for _ in 0..args.gens {
        engine.step();
        if args.trace {
            print_frame(&engine);
        }
    }
    if !args.trace {
        print_frame(&engine);
    }
    Ok(())
}

fn print_frame(engine: &Engine) {
    print!("{}", engine.grid());
    println!("{}", status_line(engine));
}
