//! Generation parameters and grid configuration, validated before any cell is built.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 7;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

/// Percent chances (0..=100) and counts driving cell population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub wall_chance: u32,
    pub trap_chance: u32,
    pub gem_chance: u32,
    pub treasure_chance: u32,
    pub double_treasure_chance: u32,
    pub monster_chance: u32,
    /// Upper bound on how many hero classes one monster is a nemesis to.
    pub nemesis_breadth: u32,
    pub boss_count: usize,
    pub minimum_fill_fraction: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            wall_chance: 25,
            trap_chance: 30,
            gem_chance: 10,
            treasure_chance: 20,
            double_treasure_chance: 30,
            monster_chance: 30,
            nemesis_breadth: 2,
            boss_count: 3,
            minimum_fill_fraction: 0.3,
        }
    }
}

impl GenerationParameters {
    fn percent_fields(&self) -> [(&'static str, u32); 6] {
        [
            ("wall_chance", self.wall_chance),
            ("trap_chance", self.trap_chance),
            ("gem_chance", self.gem_chance),
            ("treasure_chance", self.treasure_chance),
            ("double_treasure_chance", self.double_treasure_chance),
            ("monster_chance", self.monster_chance),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillCheck {
    #[default]
    Enforced,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub params: GenerationParameters,
    pub fill_check: FillCheck,
    pub max_attempts: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            params: GenerationParameters::default(),
            fill_check: FillCheck::Enforced,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize, params: GenerationParameters) -> Self {
        Self { width, height, params, ..Self::default() }
    }

    pub fn with_fill_check(mut self, fill_check: FillCheck) -> Self {
        self.fill_check = fill_check;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn cell_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        // Coordinates are addressed as i32, so each side must fit one.
        let fits_coordinates =
            i32::try_from(self.width).is_ok() && i32::try_from(self.height).is_ok();
        let cell_count = match self.cell_count() {
            Some(count) if fits_coordinates => count,
            _ => return Err(ConfigError::GridTooLarge { width: self.width, height: self.height }),
        };

        for (field, value) in self.params.percent_fields() {
            if value > 100 {
                return Err(ConfigError::PercentOutOfRange { field, value });
            }
        }

        let fill = self.params.minimum_fill_fraction;
        if !(0.0..=1.0).contains(&fill) {
            return Err(ConfigError::FillFractionOutOfRange(fill));
        }

        // Equal counts are allowed: every cell becomes a boss room.
        if self.params.boss_count > cell_count {
            return Err(ConfigError::TooManyBosses { boss_count: self.params.boss_count, cell_count });
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }
}
