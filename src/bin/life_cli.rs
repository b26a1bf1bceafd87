//! Headless runner: evolve a board for N generations and print it as text.

use clap::Parser;
use life_grid::{
    Command, Pattern, Simulation,
    cli::{SimulationArgs, parse_pattern, parse_position},
};

#[derive(Parser, Debug)]
#[command(name = "life_cli", about = "Run Game of Life without a window")]
struct Args {
    #[command(flatten)]
    sim: SimulationArgs,

    /// Generations to run
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Start from an empty board with this catalog pattern instead of a random field
    #[arg(long, value_parser = parse_pattern)]
    pattern: Option<&'static Pattern>,

    /// Anchor cell for --pattern, as x,y
    #[arg(long, default_value = "0,0", value_parser = parse_position)]
    at: (i32, i32),

    /// Also print the board every N generations (0 prints only the last one)
    #[arg(long, default_value_t = 0)]
    every: u64,
}

fn print_board(sim: &Simulation) {
    let engine = sim.engine();
    println!(
        "generation {} | alive {} | {}",
        engine.generation(),
        engine.population(),
        engine.boundary_mode().name()
    );
    println!("{}\n", engine.grid());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = args.sim.to_config();
    if args.pattern.is_some() {
        config = config.with_density(0);
    }
    let mut sim = Simulation::new(&config)?;

    if let Some(pattern) = args.pattern {
        let (x, y) = args.at;
        if !sim.engine_mut().stamp_pattern(pattern, x, y) {
            return Err(format!("{} does not fit at ({}, {})", pattern.name, x, y).into());
        }
    }

    for _ in 0..args.generations {
        if args.every > 0 && sim.engine().generation() % args.every == 0 {
            print_board(&sim);
        }
        sim.apply(Command::Step)?;
    }
    print_board(&sim);
    Ok(())
}
