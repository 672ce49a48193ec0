mod bench;
mod run;
mod util;

use bench::{run_bench, BenchArgs};
use clap::{Parser, Subcommand};
use run::{run_run, RunArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Seed a grid, step it and print the resulting frames
    Run(RunArgs),
    /// Time the update kernel on a randomly filled grid
    Bench(BenchArgs),
}

fn main() -> anyhow::Result<()> {
    let args = CLIParser::parse();

    match args.action {
        Action::Run(args) => run_run(args),
        Action::Bench(args) => run_bench(args),
    }
}
