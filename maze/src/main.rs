use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use maze_search::{text, Outcome, SearchConfig, Size, Solver};
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod generate;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve NAME.txt and write the marked maze to NAME_solved.txt
    Solve {
        /// Maze file name without the .txt extension
        name: String,
        /// Write the solved maze here instead
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Give up after expanding this many cells
        #[arg(long)]
        max_expansions: Option<usize>,
    },
    /// Generate a random maze for testing and benchmarking
    Generate {
        #[arg(long, default_value_t = 40)]
        width: u32,
        #[arg(long, default_value_t = 20)]
        height: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Probability of each cell being a wall
        #[arg(long, default_value_t = 0.3)]
        density: f64,
        /// Print to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn solved_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}_solved.txt", name))
}

fn solve(name: &str, output: &Path, max_expansions: Option<usize>) -> Result<Option<String>> {
    let input = PathBuf::from(format!("{}.txt", name));
    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read maze file: {}", input.display()))?;
    let maze = text::parse(&raw)
        .with_context(|| format!("Failed to parse maze file: {}", input.display()))?;
    print!("{}", text::render(&maze));

    let mut config = SearchConfig::default();
    if let Some(max_expansions) = max_expansions {
        config.max_expansions = max_expansions;
    }

    let solved = match Solver::with_config(maze.size(), config).solve(&maze)? {
        Outcome::Found(solved) => solved,
        Outcome::NoPath(metadata) => {
            info!("closed {} cells", metadata.num_nodes_visited);
            return Ok(None);
        }
    };

    let rendered = text::render(&solved.maze);
    println!();
    print!("{}", rendered);
    fs::write(output, &rendered)
        .with_context(|| format!("Failed to write solved maze: {}", output.display()))?;
    info!(
        "path of {} steps costing {}, closed {} cells",
        solved.solution.metadata.length,
        solved.solution.metadata.cost,
        solved.solution.metadata.num_nodes_visited
    );
    Ok(Some(rendered))
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Solve {
            name,
            output,
            max_expansions,
        } => {
            let output = output.unwrap_or_else(|| solved_path(&name));
            match solve(&name, &output, max_expansions)? {
                Some(_) => Ok(ExitCode::SUCCESS),
                None => {
                    println!("No path found");
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Generate {
            width,
            height,
            seed,
            density,
            output,
        } => {
            if u64::from(width) * u64::from(height) < 2 {
                bail!("Maze must have room for both a start and a finish");
            }
            if !(0.0..=1.0).contains(&density) {
                bail!("Density must be between 0 and 1, got {}", density);
            }
            let mut rng = Isaac64Rng::seed_from_u64(seed);
            let maze = generate::generate(Size::new(width, height), density, &mut rng)?;
            let rendered = text::render(&maze);
            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write maze: {}", path.display()))?,
                None => print!("{}", rendered),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
