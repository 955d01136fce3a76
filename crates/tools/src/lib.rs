//! Shared plumbing for the `dungeon` and `fuzz` binaries.

pub mod config_file;
pub mod logging;
pub mod seed;

pub use config_file::{CURRENT_FORMAT_VERSION, DungeonConfigFile, GridOverrides, GridSection};
pub use seed::{SeedChoice, consecutive_seeds, generate_runtime_seed};
