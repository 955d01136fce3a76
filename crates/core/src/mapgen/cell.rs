//! A single grid position: its four wall flags, contents, and optional boss room marker.

use rand_chacha::rand_core::Rng;
use serde::Serialize;

use crate::types::{Direction, TreasureKind};

use super::monster::Monster;
use super::params::GenerationParameters;
use super::roll::{percent_check, pick};
use super::treasure::Treasure;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Walls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Walls {
    pub const fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, dir: Direction) {
        let flag = match dir {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        };
        *flag = true;
    }

    pub fn all(&self) -> bool {
        Direction::ALL.iter().all(|&dir| self.get(dir))
    }
}

/// Whether the edge on side `dir` of a cell with `own` walls is closed. The edge is shared
/// with `neighbor` (absent on the perimeter), and either side declaring a wall closes it.
pub fn edge_is_walled(own: &Walls, dir: Direction, neighbor: Option<&Walls>) -> bool {
    own.get(dir) || neighbor.is_some_and(|walls| walls.get(dir.opposite()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Trap;

/// Boss identifier; ids start at 1 in claim order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BossId(u32);

impl BossId {
    pub fn new(id: u32) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    /// Id of the `claim`-th boss placed, counting from zero.
    pub(super) const fn from_claim_order(claim: usize) -> Self {
        Self(claim as u32 + 1)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub(super) walls: Walls,
    pub(super) traps: Vec<Trap>,
    pub(super) treasures: Vec<Treasure>,
    pub(super) monsters: Vec<Monster>,
    pub(super) boss: Option<BossId>,
}

impl Cell {
    pub fn random<R: Rng + ?Sized>(params: &GenerationParameters, rng: &mut R) -> Self {
        let mut cell = Self::default();
        cell.randomize(params, rng);
        cell
    }

    /// Populates a fresh cell. Each check is an independent percent roll; gems always come
    /// with a guard and exclude the regular treasure and monster rolls.
    pub fn randomize<R: Rng + ?Sized>(&mut self, params: &GenerationParameters, rng: &mut R) {
        if percent_check(rng, params.wall_chance) {
            self.walls.set(*pick(rng, &Direction::ALL));
        }
        if percent_check(rng, params.trap_chance) {
            self.traps.push(Trap);
        }

        if percent_check(rng, params.gem_chance) {
            self.treasures.push(Treasure::new(TreasureKind::Gems));
            self.monsters.push(Monster::random(rng, params.nemesis_breadth));
            return;
        }

        if percent_check(rng, params.treasure_chance) {
            self.treasures.push(Treasure::random_non_gem(rng));
            if percent_check(rng, params.double_treasure_chance) {
                self.treasures.push(Treasure::random_non_gem(rng));
            }
        }
        if percent_check(rng, params.monster_chance) {
            self.monsters.push(Monster::random(rng, params.nemesis_breadth));
        }
    }

    /// Turns this cell into boss room `id`, dropping every other content.
    pub(crate) fn claim_for_boss(&mut self, id: BossId) {
        self.boss = Some(id);
        self.traps.clear();
        self.treasures.clear();
        self.monsters.clear();
    }

    pub fn add_wall(&mut self, dir: Direction) {
        self.walls.set(dir);
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn traps(&self) -> &[Trap] {
        &self.traps
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn boss(&self) -> Option<BossId> {
        self.boss
    }

    /// Boss id with 0 standing for "no boss".
    pub fn boss_number(&self) -> u32 {
        self.boss.map_or(0, BossId::get)
    }

    pub fn has_gems(&self) -> bool {
        self.treasures.iter().any(|treasure| treasure.kind == TreasureKind::Gems)
    }

    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
            && self.treasures.is_empty()
            && self.monsters.is_empty()
            && self.boss.is_none()
    }
}
