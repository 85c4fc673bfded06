//! # Mutation
//!
//! Two deterministic bit-flip schemes. Both flip every `step`-th gene, where the
//! step cycles with the generation number: `step = 1 + generation % (len - 2)`.

use crate::individual::Individual;

fn step(len: usize, generation: usize) -> usize {
    debug_assert!(len > 2, "chromosomes need more than two genes to mutate");
    1 + generation % len.saturating_sub(2).max(1)
}

fn flip(genes: &mut [bool], from: usize, step: usize) {
    for gene in genes.iter_mut().skip(from).step_by(step) {
        *gene = !*gene;
    }
}

/// Scheme one flips genes in a window that depends on the parity of the slot index.
///
/// Even slots flip from gene 0 within the first 40% of the chromosome. Odd slots
/// flip from `len - 80% of len` to the end.
pub fn mutate_one(individual: &mut Individual, generation: usize) {
    let len = individual.len();
    let step = step(len, generation);

    if individual.index() % 2 == 0 {
        let window = len * 4 / 10;
        flip(&mut individual.chromosome_mut()[..window], 0, step);
    } else {
        let window = len * 8 / 10;
        flip(individual.chromosome_mut(), len - window, step);
    }
}

/// Scheme two flips genes `0, step, 2 * step, ...` across the whole chromosome.
pub fn mutate_two(individual: &mut Individual, generation: usize) {
    let step = step(individual.len(), generation);
    flip(individual.chromosome_mut(), 0, step);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flipped(individual: &Individual) -> Vec<usize> {
        individual.selected_items()
    }

    #[test]
    fn test_step_cycles_with_generation() {
        assert_eq!(step(10, 0), 1);
        assert_eq!(step(10, 3), 4);
        assert_eq!(step(10, 8), 1);
        assert_eq!(step(10, 9), 2);
    }

    #[test]
    fn test_mutate_one_even_slot_hits_first_forty_percent() {
        let mut individual = Individual::empty(10, 4);
        mutate_one(&mut individual, 1);

        assert_eq!(flipped(&individual), vec![0, 2]);
    }

    #[test]
    fn test_mutate_one_odd_slot_hits_last_eighty_percent() {
        let mut individual = Individual::empty(10, 3);
        mutate_one(&mut individual, 2);

        assert_eq!(flipped(&individual), vec![2, 5, 8]);
    }

    #[test]
    fn test_mutate_one_generation_zero_flips_whole_window() {
        let mut even = Individual::empty(20, 0);
        mutate_one(&mut even, 0);
        assert_eq!(flipped(&even), (0..8).collect::<Vec<_>>());

        let mut odd = Individual::empty(20, 1);
        mutate_one(&mut odd, 0);
        assert_eq!(flipped(&odd), (4..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_mutate_two_hits_whole_chromosome() {
        let mut individual = Individual::empty(10, 7);
        mutate_two(&mut individual, 2);

        assert_eq!(flipped(&individual), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_mutation_flips_set_genes_off() {
        let mut individual = Individual::new(vec![true; 10], 5);
        mutate_two(&mut individual, 0);

        assert!(flipped(&individual).is_empty());
    }

    #[test]
    fn test_mutation_twice_restores_chromosome() {
        let original = Individual::seeded(30, 11);
        let mut individual = original.clone();

        mutate_one(&mut individual, 17);
        mutate_one(&mut individual, 17);

        assert_eq!(individual, original);
    }
}
