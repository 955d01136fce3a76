//! Boss room placement over a freshly built grid.

use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::cell::BossId;
use super::grid::Grid;
use super::roll::index;

/// Claims `boss_count` distinct cells, each chosen uniformly among the cells not yet
/// claimed. Ids follow claim order starting at 1. Callers guarantee `boss_count` does not
/// exceed the cell count.
pub(super) fn place_bosses<R: Rng + ?Sized>(grid: &mut Grid, boss_count: usize, rng: &mut R) {
    let width = grid.width();
    let mut unclaimed: Vec<usize> = (0..width * grid.height()).collect();
    debug_assert!(boss_count <= unclaimed.len());

    for claim in 0..boss_count.min(unclaimed.len()) {
        let slot = index(rng, unclaimed.len());
        let cell_index = unclaimed.swap_remove(slot);
        let pos = Pos { y: (cell_index / width) as i32, x: (cell_index % width) as i32 };
        grid.cell_mut(pos).claim_for_boss(BossId::from_claim_order(claim));
    }
}
