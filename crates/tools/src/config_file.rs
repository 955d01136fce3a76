//! TOML run configuration with command-line overrides layered on top.

use std::fs;
use std::io;
use std::path::Path;

use dungeon_core::mapgen::params::{DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_WIDTH};
use dungeon_core::{FillCheck, GenerationParameters, GridConfig};
use render::RenderStyle;
use serde::{Deserialize, Serialize};

pub const CURRENT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridSection {
    pub width: usize,
    pub height: usize,
    pub fill_check: FillCheck,
    pub max_attempts: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_check: FillCheck::Enforced,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DungeonConfigFile {
    pub format_version: u32,
    pub grid: GridSection,
    pub generation: GenerationParameters,
    pub render: RenderStyle,
}

impl Default for DungeonConfigFile {
    fn default() -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            grid: GridSection::default(),
            generation: GenerationParameters::default(),
            render: RenderStyle::default(),
        }
    }
}

impl DungeonConfigFile {
    pub fn parse(content: &str) -> io::Result<Self> {
        let file: Self =
            toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if file.format_version != CURRENT_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "unsupported config format_version {}, expected {CURRENT_FORMAT_VERSION}",
                    file.format_version
                ),
            ));
        }
        Ok(file)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.grid.width, self.grid.height, self.generation.clone())
            .with_fill_check(self.grid.fill_check)
            .with_max_attempts(self.grid.max_attempts)
    }
}

/// Command-line values that replace whatever the config file says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub max_attempts: Option<u32>,
    pub no_fill_check: bool,
    pub min_fill: Option<f64>,
    pub bosses: Option<usize>,
}

impl GridOverrides {
    pub fn apply(&self, config: &mut GridConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if self.no_fill_check {
            config.fill_check = FillCheck::Disabled;
        }
        if let Some(min_fill) = self.min_fill {
            config.params.minimum_fill_fraction = min_fill;
        }
        if let Some(bosses) = self.bosses {
            config.params.boss_count = bosses;
        }
    }
}
