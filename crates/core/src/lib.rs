pub mod error;
pub mod mapgen;
pub mod types;

pub use error::{ConfigError, GridError};
pub use mapgen::*;
pub use types::*;
