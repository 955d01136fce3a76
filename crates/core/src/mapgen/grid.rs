//! The generated grid: row-major cells, bounds-checked lookup, and derived edge queries.

use std::fmt;

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::GridError;
use crate::types::{Direction, Pos};

use super::cell::{BossId, Cell, edge_is_walled};
use super::monster::MONSTER_NAMES;

pub(super) fn in_bounds(width: usize, height: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    attempts: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub(super) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, attempts: 1, cells }
    }

    pub(super) fn set_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of builds the generator ran before this grid was accepted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell, GridError> {
        let pos = Pos { y, x };
        if !in_bounds(self.width, self.height, pos) {
            return Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(&self.cells[(y as usize) * self.width + (x as usize)])
    }

    pub(super) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        debug_assert!(in_bounds(self.width, self.height, pos));
        &mut self.cells[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    fn neighbor(&self, pos: Pos, dir: Direction) -> Option<&Cell> {
        let (dx, dy) = dir.offset();
        self.cell(pos.x + dx, pos.y + dy).ok()
    }

    /// Whether the `dir` edge of cell `(x, y)` is closed, taking the neighbour's flag facing
    /// back across the same edge into account.
    pub fn edge_walled(&self, x: i32, y: i32, dir: Direction) -> Result<bool, GridError> {
        let cell = self.cell(x, y)?;
        let neighbor = self.neighbor(Pos { y, x }, dir).map(Cell::walls);
        Ok(edge_is_walled(cell.walls(), dir, neighbor))
    }

    /// Cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, cell)| {
            let pos = Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 };
            (pos, cell)
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn filled_fraction(&self) -> f64 {
        self.filled_count() as f64 / self.cells.len() as f64
    }

    /// Boss rooms sorted by id.
    pub fn boss_cells(&self) -> Vec<(BossId, Pos)> {
        let mut bosses: Vec<_> =
            self.iter().filter_map(|(pos, cell)| cell.boss().map(|id| (id, pos))).collect();
        bosses.sort();
        bosses
    }

    /// Closes every outward-facing edge of the perimeter.
    pub(super) fn fence(&mut self) {
        let (width, height) = (self.width as i32, self.height as i32);
        for x in 0..width {
            self.cell_mut(Pos { y: 0, x }).add_wall(Direction::North);
            self.cell_mut(Pos { y: height - 1, x }).add_wall(Direction::South);
        }
        for y in 0..height {
            self.cell_mut(Pos { y, x: 0 }).add_wall(Direction::West);
            self.cell_mut(Pos { y, x: width - 1 }).add_wall(Direction::East);
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            let walls = cell.walls();
            bytes.push(
                u8::from(walls.north)
                    | u8::from(walls.south) << 1
                    | u8::from(walls.east) << 2
                    | u8::from(walls.west) << 3,
            );
            bytes.extend((cell.traps().len() as u32).to_le_bytes());

            bytes.extend((cell.treasures().len() as u32).to_le_bytes());
            for treasure in cell.treasures() {
                bytes.push(treasure.kind as u8);
            }

            bytes.extend((cell.monsters().len() as u32).to_le_bytes());
            for monster in cell.monsters() {
                let name_index = MONSTER_NAMES.iter().position(|&name| name == monster.name());
                bytes.push(name_index.map_or(u8::MAX, |index| index as u8));
                bytes.push(monster.nemesis().len() as u8);
                for nemesis in monster.nemesis() {
                    bytes.push(nemesis.class as u8);
                    bytes.push(nemesis.level);
                }
            }

            bytes.extend(cell.boss_number().to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in Direction::ALL {
            let code = if self.walls().get(dir) { dir.code() } else { '.' };
            write!(f, "{code}")?;
        }
        if let Some(boss) = self.boss() {
            return write!(f, " B{}", boss.get());
        }
        if self.is_empty() {
            return write!(f, " -");
        }
        for _ in self.traps() {
            write!(f, " T")?;
        }
        for treasure in self.treasures() {
            write!(f, " ${}", treasure.kind.code())?;
        }
        for monster in self.monsters() {
            write!(f, " {}(", monster.name())?;
            for (index, nemesis) in monster.nemesis().iter().enumerate() {
                if index > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}{}", nemesis.class.code(), nemesis.level)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            write!(f, "{y:>3} ||")?;
            for cell in row {
                write!(f, " {cell} |")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::monster::{Monster, Nemesis};
    use crate::mapgen::treasure::Treasure;
    use crate::types::{HeroClass, TreasureKind};

    fn blank_grid(width: usize, height: usize) -> Grid {
        Grid::from_cells(width, height, vec![Cell::default(); width * height])
    }

    #[test]
    fn cell_lookup_rejects_every_side_of_the_boundary() {
        let grid = blank_grid(6, 7);
        for (x, y) in [(-1, 0), (6, 0), (0, -1), (0, 7), (i32::MIN, i32::MAX)] {
            assert_eq!(
                grid.cell(x, y),
                Err(GridError::OutOfBounds { x, y, width: 6, height: 7 }),
                "({x}, {y}) must not be clamped or wrapped"
            );
        }
        assert!(grid.cell(5, 6).is_ok());
        assert!(grid.cell(0, 0).is_ok());
    }

    #[test]
    fn fence_closes_the_perimeter_regardless_of_prior_walls() {
        let mut grid = blank_grid(4, 3);
        grid.cell_mut(Pos { y: 0, x: 2 }).add_wall(Direction::North);
        grid.cell_mut(Pos { y: 1, x: 1 }).add_wall(Direction::South);
        grid.fence();

        for (pos, cell) in grid.iter() {
            let walls = cell.walls();
            assert_eq!(walls.north, pos.y == 0, "north at {pos:?}");
            assert_eq!(walls.west, pos.x == 0, "west at {pos:?}");
            assert_eq!(walls.east, pos.x == 3, "east at {pos:?}");
            assert_eq!(walls.south, pos.y == 2 || pos == Pos { y: 1, x: 1 }, "south at {pos:?}");
        }
    }

    #[test]
    fn single_cell_fence_closes_all_four_sides() {
        let mut grid = blank_grid(1, 1);
        grid.fence();
        assert!(grid.cell(0, 0).expect("in bounds").walls().all());
    }

    #[test]
    fn edge_walled_ors_both_sides_of_a_shared_edge() {
        let mut grid = blank_grid(2, 2);
        grid.cell_mut(Pos { y: 0, x: 0 }).add_wall(Direction::South);
        grid.cell_mut(Pos { y: 0, x: 1 }).add_wall(Direction::West);

        assert_eq!(grid.edge_walled(0, 1, Direction::North), Ok(true));
        assert_eq!(grid.edge_walled(0, 0, Direction::South), Ok(true));
        assert_eq!(grid.edge_walled(0, 0, Direction::East), Ok(true));
        assert_eq!(grid.edge_walled(1, 1, Direction::North), Ok(false));
        assert_eq!(grid.edge_walled(1, 1, Direction::East), Ok(false));
        assert!(grid.edge_walled(2, 0, Direction::West).is_err());
    }

    #[test]
    fn filled_fraction_counts_non_empty_cells() {
        let mut grid = blank_grid(2, 2);
        assert_eq!(grid.filled_fraction(), 0.0);
        grid.cell_mut(Pos { y: 1, x: 0 }).claim_for_boss(BossId::new(1).expect("non-zero"));
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(grid.filled_fraction(), 0.25);
    }

    #[test]
    fn display_lists_every_row_and_content() {
        let mut grid = blank_grid(2, 1);
        grid.cell_mut(Pos { y: 0, x: 0 }).claim_for_boss(BossId::new(3).expect("non-zero"));
        grid.fence();

        let dump = grid.to_string();
        assert_eq!(dump.lines().count(), 1);
        assert!(dump.contains("NS.W B3"), "{dump}");
        assert!(dump.contains("NSE. -"), "{dump}");
    }

    #[test]
    fn cell_display_shows_treasure_and_nemesis_codes() {
        let mut grid = blank_grid(1, 1);
        let cell = grid.cell_mut(Pos { y: 0, x: 0 });
        cell.treasures.push(Treasure::new(TreasureKind::Gems));
        cell.monsters.push(Monster::new(
            "Troll",
            vec![
                Nemesis { class: HeroClass::Rogue, level: 4 },
                Nemesis { class: HeroClass::Cleric, level: 1 },
            ],
        ));
        assert_eq!(grid.cell(0, 0).expect("in bounds").to_string(), ".... $G Troll(R4,C1)");
    }

    #[test]
    fn fingerprint_tracks_content_changes() {
        let mut grid = blank_grid(3, 3);
        let before = grid.fingerprint();
        assert_eq!(before, blank_grid(3, 3).fingerprint());
        grid.cell_mut(Pos { y: 2, x: 2 }).add_wall(Direction::East);
        assert_ne!(before, grid.fingerprint());
    }
}
