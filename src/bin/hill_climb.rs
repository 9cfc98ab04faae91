use clap::Parser;
use hill_paths::{AlgorithmKind, Heightmap, SolverConfig};
use std::path::PathBuf;

/// Solve the hill climbing heightmap puzzle
#[derive(Parser, Debug)]
#[command(name = "hill_climb", about = "Fewest steps up the heightmap", version)]
struct Args {
    /// Puzzle input file
    #[arg(default_value = "./data/input.txt")]
    input: PathBuf,

    /// Shortest path algorithm to use
    #[arg(short, long, value_enum, default_value = "dijkstra")]
    algorithm: AlgorithmKind,

    /// Iteration bound (defaults to the number of cells)
    #[arg(short, long)]
    max_iterations: Option<usize>,

    /// Print the answers as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = SolverConfig::new().with_algorithm(args.algorithm);
    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }

    let heightmap = Heightmap::from_file(&args.input)?;
    let solution = heightmap.solve(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution.part_one);
        println!("{}", solution.part_two);
    }

    Ok(())
}
