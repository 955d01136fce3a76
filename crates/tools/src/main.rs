use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{Grid, generate_grid};
use serde::Serialize;
use tools::{DungeonConfigFile, GridOverrides, SeedChoice, logging};
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate a seeded dungeon grid", long_about = None)]
struct Args {
    /// TOML file with [grid], [generation] and [render] sections
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Seed for the generator; derived from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    max_attempts: Option<u32>,
    /// Accept the first build regardless of how full it is
    #[arg(long)]
    no_fill_check: bool,
    #[arg(long)]
    min_fill: Option<f64>,
    #[arg(long)]
    bosses: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also render the grid to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> GridOverrides {
        GridOverrides {
            width: self.width,
            height: self.height,
            max_attempts: self.max_attempts,
            no_fill_check: self.no_fill_check,
            min_fill: self.min_fill,
            bosses: self.bosses,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    attempts: u32,
    fill_fraction: f64,
    fingerprint: String,
    grid: &'a Grid,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let file = match &args.config {
        Some(path) => DungeonConfigFile::load(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => DungeonConfigFile::default(),
    };
    let mut config = file.grid_config();
    args.overrides().apply(&mut config);

    let seed = SeedChoice::resolve(args.seed);
    info!(seed = seed.value(), generated = seed.is_generated(), "generating grid");

    let grid = generate_grid(config, seed.value()).context("Grid generation failed")?;
    let fingerprint = format!("{:016x}", grid.fingerprint());

    match args.format {
        OutputFormat::Text => {
            print!("{grid}");
            println!(
                "seed {} | attempts {} | fill {:.3} | fingerprint {fingerprint}",
                seed.value(),
                grid.attempts(),
                grid.filled_fraction()
            );
        }
        OutputFormat::Json => {
            let report = Report {
                seed: seed.value(),
                attempts: grid.attempts(),
                fill_fraction: grid.filled_fraction(),
                fingerprint,
                grid: &grid,
            };
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize grid")?;
            println!("{json}");
        }
    }

    if let Some(path) = &args.png {
        render::save_png(&grid, &file.render, path)
            .with_context(|| format!("Failed to render grid to {}", path.display()))?;
    }

    Ok(())
}
