//! # Crossover
//!
//! Single-point crossover whose cut point cycles with the generation number instead
//! of being drawn at random: `cut = 1 + generation % len`.

use crate::individual::Individual;

fn cut(len: usize, generation: usize) -> usize {
    1 + generation % len.max(1)
}

/// Writes both children of `parent1` and `parent2` into `child1` and `child2`.
///
/// `child1` takes genes `[0, cut)` from `parent1` and the rest from `parent2`;
/// `child2` is the mirror. Children keep their own slot indices.
pub fn crossover_into(
    parent1: &Individual,
    parent2: &Individual,
    child1: &mut Individual,
    child2: &mut Individual,
    generation: usize,
) {
    debug_assert_eq!(parent1.len(), parent2.len());

    let len = parent1.len();
    let cut = cut(len, generation).min(len);

    for (child, (head, tail)) in [(child1, (parent1, parent2)), (child2, (parent2, parent1))] {
        let slot = child.index();
        child.inherit(head, slot);
        child.chromosome_mut()[cut..].copy_from_slice(&tail.chromosome()[cut..]);
    }
}

/// Returns both children of `parent1` and `parent2`, placed at `slots`.
pub fn crossover(
    parent1: &Individual,
    parent2: &Individual,
    generation: usize,
    slots: (usize, usize),
) -> (Individual, Individual) {
    let mut child1 = Individual::empty(parent1.len(), slots.0);
    let mut child2 = Individual::empty(parent2.len(), slots.1);
    crossover_into(parent1, parent2, &mut child1, &mut child2, generation);
    (child1, child2)
}
