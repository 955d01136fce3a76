//! Structural invariant checks over a finished grid, shared by tests and the fuzz harness.

use std::fmt;

use crate::types::{Direction, Pos};

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    BossRoomNotEmpty { pos: Pos },
    UnguardedGems { pos: Pos },
    OpenPerimeter { pos: Pos, dir: Direction },
    BossIdsNotContiguous { ids: Vec<u32> },
    BossCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BossRoomNotEmpty { pos } => {
                write!(f, "boss room at ({}, {}) holds other contents", pos.x, pos.y)
            }
            Self::UnguardedGems { pos } => {
                write!(f, "gems at ({}, {}) have no guarding monster", pos.x, pos.y)
            }
            Self::OpenPerimeter { pos, dir } => {
                write!(f, "perimeter cell ({}, {}) is open to the {dir:?}", pos.x, pos.y)
            }
            Self::BossIdsNotContiguous { ids } => {
                write!(f, "boss ids {ids:?} are not exactly 1..=N")
            }
            Self::BossCountMismatch { expected, found } => {
                write!(f, "expected {expected} boss rooms, found {found}")
            }
        }
    }
}

/// Every invariant the generator promises for a grid built with `expected_bosses` boss
/// rooms. Cell violations come first in row-major order, then boss id checks.
pub fn audit(grid: &Grid, expected_bosses: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let (last_x, last_y) = (grid.width() as i32 - 1, grid.height() as i32 - 1);

    for (pos, cell) in grid.iter() {
        if cell.boss().is_some()
            && !(cell.traps().is_empty() && cell.treasures().is_empty() && cell.monsters().is_empty())
        {
            violations.push(Violation::BossRoomNotEmpty { pos });
        }
        if cell.has_gems() && cell.monsters().is_empty() {
            violations.push(Violation::UnguardedGems { pos });
        }

        let outward = [
            (pos.y == 0, Direction::North),
            (pos.y == last_y, Direction::South),
            (pos.x == last_x, Direction::East),
            (pos.x == 0, Direction::West),
        ];
        for (on_edge, dir) in outward {
            if on_edge && !cell.walls().get(dir) {
                violations.push(Violation::OpenPerimeter { pos, dir });
            }
        }
    }

    let ids: Vec<u32> = grid.boss_cells().iter().map(|(id, _)| id.get()).collect();
    if ids.len() != expected_bosses {
        violations.push(Violation::BossCountMismatch { expected: expected_bosses, found: ids.len() });
    }
    if ids.iter().zip(1..).any(|(&id, expected)| id != expected) {
        violations.push(Violation::BossIdsNotContiguous { ids });
    }

    violations
}
