//! # Ranking
//!
//! The total order used to rank a population: higher fitness first, then fewer
//! items taken, then the higher slot index. Slot indices are unique within a
//! population, so no two individuals ever compare equal and the result of the sort
//! does not depend on the sorting algorithm.

use std::cmp::Ordering;

use crate::individual::Individual;

/// Compares two individuals so that better ones sort first.
pub fn compare(a: &Individual, b: &Individual) -> Ordering {
    b.fitness()
        .cmp(&a.fitness())
        .then_with(|| a.objects_taken().cmp(&b.objects_taken()))
        .then_with(|| b.index().cmp(&a.index()))
}

/// Sorts a population best first.
pub fn rank(population: &mut [Individual]) {
    population.sort_unstable_by(compare);
}

/// Checks that every adjacent pair respects [`compare`].
pub fn is_ranked(population: &[Individual]) -> bool {
    population
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    fn evaluated(genes: &[bool], index: usize, instance: &Instance) -> Individual {
        let mut individual = Individual::new(genes.to_vec(), index);
        individual.evaluate(instance);
        individual
    }

    #[test]
    fn test_higher_fitness_first() {
        let instance = Instance::new([(10, 1), (20, 1), (5, 1)], 10);
        let mut population = vec![
            evaluated(&[true, false, false], 0, &instance),
            evaluated(&[false, true, false], 1, &instance),
            evaluated(&[false, false, true], 2, &instance),
        ];

        rank(&mut population);

        let fitness: Vec<u64> = population.iter().map(|i| i.fitness()).collect();
        assert_eq!(fitness, vec![20, 10, 5]);
    }

    #[test]
    fn test_fewer_items_break_fitness_ties() {
        let instance = Instance::new([(10, 1), (4, 1), (6, 1)], 10);
        let mut population = vec![
            evaluated(&[false, true, true], 0, &instance),
            evaluated(&[true, false, false], 1, &instance),
        ];

        rank(&mut population);

        assert_eq!(population[0].index(), 1);
        assert_eq!(population[0].objects_taken(), 1);
    }

    #[test]
    fn test_higher_index_breaks_remaining_ties() {
        let instance = Instance::new([(1, 5), (1, 5), (1, 5)], 0);
        let mut population: Vec<Individual> = (0..3)
            .map(|slot| {
                let mut genes = vec![false; 3];
                genes[slot] = true;
                evaluated(&genes, slot, &instance)
            })
            .collect();

        rank(&mut population);

        let order: Vec<usize> = population.iter().map(|i| i.index()).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert!(is_ranked(&population));
    }

    #[test]
    fn test_is_ranked_detects_disorder() {
        let instance = Instance::new([(10, 1), (20, 1)], 10);
        let population = vec![
            evaluated(&[true, false], 0, &instance),
            evaluated(&[false, true], 1, &instance),
        ];

        assert!(!is_ranked(&population));
    }
}
