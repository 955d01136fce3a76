use rand_chacha::rand_core::Rng;
use serde::Serialize;

use crate::types::TreasureKind;

use super::roll::pick;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Treasure {
    pub kind: TreasureKind,
}

impl Treasure {
    pub const fn new(kind: TreasureKind) -> Self {
        Self { kind }
    }

    /// Any kind except gems, which only appear under guard.
    pub fn random_non_gem<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { kind: *pick(rng, &TreasureKind::NON_GEM) }
    }
}

impl Default for Treasure {
    fn default() -> Self {
        Self::new(TreasureKind::Potion)
    }
}
