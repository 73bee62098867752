mod config;
mod output;
mod simulate;
mod student;

use adaptest_core::constants::DEFAULT_GRID_SIZE;
use adaptest_core::{ObservationParams, QuestionCandidate};
use clap::Parser;
use std::path::PathBuf;

use crate::simulate::{run_simulation, SimulationSettings};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "adaptest", version, about = "Adaptive testing simulation harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compare adaptive (EIG) question selection against a linear control group
    Simulate(SimulateArgs),
    /// Create a default config file at ~/.config/adaptest/config.toml
    Init,
}

#[derive(Parser)]
struct SimulateArgs {
    /// True ability for a simulated cohort (repeatable).
    /// Default: 0.2 through 0.9 in steps of 0.1.
    #[arg(long = "ability")]
    abilities: Vec<f64>,

    /// Virtual students per ability value
    #[arg(long)]
    students_per_ability: Option<usize>,

    /// Question budget per student
    #[arg(long)]
    max_questions: Option<usize>,

    /// Convergence threshold on |estimate - true ability|
    #[arg(long)]
    threshold: Option<f64>,

    /// JSON file with the question pool: an array of {"id", "difficulty"} records
    #[arg(long)]
    pool: Option<PathBuf>,

    /// Size of the generated pool when --pool is not given.
    /// Difficulties are evenly spaced over [0.05, 0.95].
    #[arg(long, default_value_t = 50)]
    pool_size: usize,

    /// Number of points on the ability hypothesis grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Guessing floor of the observation model
    #[arg(long)]
    guess: Option<f64>,

    /// Slipping ceiling of the observation model
    #[arg(long)]
    slip: Option<f64>,

    /// Base seed for the virtual students
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output JSON (full per-student outcomes) instead of a table
    #[arg(long)]
    json: bool,

    /// Show per-student progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/adaptest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Load a question pool from a JSON file, or generate one with evenly
/// spaced difficulties.
fn load_pool(args: &SimulateArgs) -> Vec<QuestionCandidate> {
    if let Some(ref path) = args.pool {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read pool file {}: {e}", path.display())));
        let pool: Vec<QuestionCandidate> = serde_json::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse pool file {}: {e}", path.display())));
        if pool.len() < 2 {
            bail(format!("Pool needs at least 2 questions, got {}", pool.len()));
        }
        return pool;
    }

    if args.pool_size < 2 {
        bail(format!("--pool-size must be at least 2, got {}", args.pool_size));
    }
    (0..args.pool_size)
        .map(|i| QuestionCandidate {
            id: i as i64 + 1,
            difficulty: 0.05 + 0.9 * i as f64 / (args.pool_size - 1) as f64,
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default grid size, model constants, etc.");
        }
    }
}

fn run_simulate(args: SimulateArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let grid_size = args.grid_size.or(cfg.grid_size).unwrap_or(DEFAULT_GRID_SIZE);
    let students_per_ability = args
        .students_per_ability
        .or(cfg.students_per_ability)
        .unwrap_or(10);
    let max_questions = args.max_questions.or(cfg.max_questions).unwrap_or(50);
    let convergence_threshold = args
        .threshold
        .or(cfg.convergence_threshold)
        .unwrap_or(0.05);

    let params = ObservationParams {
        guess: args.guess.or(cfg.guess).unwrap_or_else(|| ObservationParams::default().guess),
        slip: args.slip.or(cfg.slip).unwrap_or_else(|| ObservationParams::default().slip),
        ..Default::default()
    };
    params
        .validate()
        .unwrap_or_else(|e| bail(format!("Invalid model constants: {e}")));

    let abilities = if args.abilities.is_empty() {
        (2..=9).map(|i| i as f64 / 10.0).collect()
    } else {
        args.abilities.clone()
    };
    for &a in &abilities {
        if !(0.0..=1.0).contains(&a) {
            bail(format!("--ability must lie in [0, 1], got {a}"));
        }
    }

    let pool = load_pool(&args);

    if args.verbose {
        eprintln!(
            "Simulating {} abilities x {} students x 2 modes over {} questions (budget {})",
            abilities.len(),
            students_per_ability,
            pool.len(),
            max_questions,
        );
    }

    let settings = SimulationSettings {
        grid_size,
        params,
        abilities,
        students_per_ability,
        max_questions,
        convergence_threshold,
        seed: args.seed,
        verbose: args.verbose,
    };

    let report = run_simulation(&pool, &settings);

    if args.json {
        output::print_json(&report);
    } else {
        output::print_table(&report);
    }
}
