use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeroClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl HeroClass {
    pub const ALL: [Self; 4] = [Self::Warrior, Self::Mage, Self::Rogue, Self::Cleric];

    pub const fn code(self) -> char {
        match self {
            Self::Warrior => 'W',
            Self::Mage => 'M',
            Self::Rogue => 'R',
            Self::Cleric => 'C',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TreasureKind {
    Gems,
    Potion,
    Artifact,
    LevelUp,
}

impl TreasureKind {
    pub const ALL: [Self; 4] = [Self::Gems, Self::Potion, Self::Artifact, Self::LevelUp];
    /// Kinds a cell may hold without a guarding monster.
    pub const NON_GEM: [Self; 3] = [Self::Potion, Self::Artifact, Self::LevelUp];

    pub const fn code(self) -> char {
        match self {
            Self::Gems => 'G',
            Self::Potion => 'P',
            Self::Artifact => 'A',
            Self::LevelUp => 'L',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Grid step `(dx, dy)` towards the neighbour on this side; north is `y - 1`.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}
