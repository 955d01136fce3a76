//! Monster factory: random names plus distinct nemesis hero classes with difficulty levels.

use rand_chacha::rand_core::Rng;
use serde::Serialize;

use crate::types::HeroClass;

use super::roll::{pick, uniform_inclusive};

/// Names a generated monster may carry.
pub const MONSTER_NAMES: [&str; 4] = ["Goblin", "Troll", "Dragon", "Skeleton"];

pub const MIN_NEMESIS_LEVEL: u8 = 1;
pub const MAX_NEMESIS_LEVEL: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Nemesis {
    pub class: HeroClass,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Monster {
    name: &'static str,
    nemesis: Vec<Nemesis>,
}

impl Monster {
    pub fn new(name: &'static str, nemesis: Vec<Nemesis>) -> Self {
        Self { name, nemesis }
    }

    /// Draws a monster that is a nemesis to between 1 and `nemesis_breadth` distinct hero
    /// classes. A breadth of zero yields no nemesis classes; breadths above the number of
    /// classes are clamped.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, nemesis_breadth: u32) -> Self {
        let name = *pick(rng, &MONSTER_NAMES);

        let count = if nemesis_breadth == 0 {
            0
        } else {
            let drawn = uniform_inclusive(rng, 1, nemesis_breadth) as usize;
            drawn.min(HeroClass::ALL.len())
        };

        // Partial Fisher-Yates: the first `count` slots end up a distinct sample.
        let mut classes = HeroClass::ALL;
        let mut nemesis = Vec::with_capacity(count);
        for slot in 0..count {
            let last = (classes.len() - 1) as u32;
            let swap_with = uniform_inclusive(rng, slot as u32, last) as usize;
            classes.swap(slot, swap_with);
            let level = uniform_inclusive(rng, MIN_NEMESIS_LEVEL.into(), MAX_NEMESIS_LEVEL.into());
            nemesis.push(Nemesis { class: classes[slot], level: level as u8 });
        }

        Self { name, nemesis }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn nemesis(&self) -> &[Nemesis] {
        &self.nemesis
    }
}
