use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{GenerationParameters, GridConfig, audit, generate_grid};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{consecutive_seeds, logging};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed; runs use consecutive seeds from here
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    /// Pick grid size and boss count per run instead of using the defaults
    #[arg(long)]
    vary: bool,
}

fn config_for_run(rng: &mut ChaCha8Rng, vary: bool) -> GridConfig {
    if !vary {
        return GridConfig::default();
    }
    let width = 1 + (rng.next_u64() % 12) as usize;
    let height = 1 + (rng.next_u64() % 12) as usize;
    let boss_count = (rng.next_u64() % 4) as usize;
    let params =
        GenerationParameters { boss_count: boss_count.min(width * height), ..GenerationParameters::default() };
    GridConfig::new(width, height, params)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    println!("Fuzzing {} grids starting at seed {}...", args.runs, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_attempts = 0_u64;
    let mut worst = (0_u32, args.seed);
    for seed in consecutive_seeds(args.seed, args.runs) {
        let config = config_for_run(&mut rng, args.vary);
        let (width, height, bosses) = (config.width, config.height, config.params.boss_count);
        let grid = generate_grid(config, seed)?;

        let violations = audit(&grid, bosses);
        if !violations.is_empty() {
            for violation in &violations {
                eprintln!("seed {seed} ({width}x{height}): {violation}");
            }
            bail!("Invariant failed on seed {seed} with {} violation(s)", violations.len());
        }

        total_attempts += u64::from(grid.attempts());
        if grid.attempts() > worst.0 {
            worst = (grid.attempts(), seed);
        }
    }

    let mean = total_attempts as f64 / f64::from(args.runs.max(1));
    println!("Mean attempts per grid: {mean:.2}");
    println!("Most attempts: {} (seed {})", worst.0, worst.1);
    println!("Fuzzing completed successfully.");
    Ok(())
}
