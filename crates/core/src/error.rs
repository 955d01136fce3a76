//! Error types surfaced by grid configuration, generation, and lookup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: usize, height: usize },

    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error(
        "no grid reached the fill threshold after {attempts} attempts (best fill {best_fill_fraction:.3})"
    )]
    GenerationExhausted { attempts: u32, best_fill_fraction: f64 },
}

/// Names the configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid dimensions {width}x{height} overflow the cell count")]
    GridTooLarge { width: usize, height: usize },

    #[error("{field} must be a percentage in 0..=100, got {value}")]
    PercentOutOfRange { field: &'static str, value: u32 },

    #[error("minimum fill fraction must lie in 0.0..=1.0, got {0}")]
    FillFractionOutOfRange(f64),

    #[error("boss count {boss_count} exceeds the {cell_count} available cells")]
    TooManyBosses { boss_count: usize, cell_count: usize },

    #[error("max attempts must be at least 1")]
    ZeroAttempts,
}
