//! # Breeding
//!
//! Builds the next generation from a ranked one. The next buffer is split into four
//! bands, each a fixed fraction of the population size `N`:
//!
//! | band         | target slots        | source ranks        | operator            |
//! |--------------|---------------------|---------------------|---------------------|
//! | elitism      | `[0, 3N/10)`        | `[0, 3N/10)`        | copy                |
//! | mutation one | `[3N/10, 5N/10)`    | `[0, 2N/10)`        | copy + `mutate_one` |
//! | mutation two | `[5N/10, 7N/10)`    | `[2N/10, 4N/10)`    | copy + `mutate_two` |
//! | crossover    | `[7N/10, N)`        | pairs `(2p, 2p+1)`  | `crossover`         |
//!
//! When the crossover band has an odd size its last slot receives an unchanged copy
//! of the last ranked individual.
//!
//! Every worker takes its share of each band from the partitioner, so target slots
//! never overlap between workers.
//!
//! ```rust
//! use knapga::breeding::Bands;
//!
//! let bands = Bands::new(10);
//! assert_eq!(bands.elitism().target, 0..3);
//! assert_eq!(bands.crossover().target, 7..10);
//! assert_eq!(bands.total(), 10);
//! ```
pub mod crossover;
pub mod mutation;

use std::ops::Range;

pub use crossover::{crossover, crossover_into};
pub use mutation::{mutate_one, mutate_two};

use crate::partition::partition;
use crate::population::Population;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Elitism,
    MutationOne,
    MutationTwo,
    Crossover,
}

/// One band of the next generation: which ranks feed it and which slots it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub operator: Operator,
    pub source: Range<usize>,
    pub target: Range<usize>,
    /// Rank copied into the unpaired last slot of an odd crossover band.
    pub fill: Option<usize>,
}

impl Band {
    /// Number of complete parent pairs feeding a crossover band.
    pub fn pairs(&self) -> usize {
        self.target.len() / 2
    }

    /// The unpaired last slot of a crossover band of odd size, with the rank copied into it.
    pub fn solo(&self) -> Option<(usize, usize)> {
        self.fill.map(|rank| (rank, self.target.end - 1))
    }
}

/// The four bands for a population of a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bands {
    size: usize,
    bands: [Band; 4],
}

impl Bands {
    pub fn new(size: usize) -> Self {
        let elite = size * 3 / 10;
        let mutated_one = size * 2 / 10;
        let mutated_two = size * 2 / 10;
        let crossed = size - elite - mutated_one - mutated_two;

        let mut cursor = 0;
        let mut next = |len: usize| {
            let target = cursor..cursor + len;
            cursor += len;
            target
        };

        let bands = [
            Band {
                operator: Operator::Elitism,
                source: 0..elite,
                target: next(elite),
                fill: None,
            },
            Band {
                operator: Operator::MutationOne,
                source: 0..mutated_one,
                target: next(mutated_one),
                fill: None,
            },
            Band {
                operator: Operator::MutationTwo,
                source: mutated_one..mutated_one + mutated_two,
                target: next(mutated_two),
                fill: None,
            },
            Band {
                operator: Operator::Crossover,
                source: 0..crossed,
                target: next(crossed),
                fill: (crossed % 2 == 1).then(|| size - 1),
            },
        ];

        Self { size, bands }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn elitism(&self) -> &Band {
        &self.bands[0]
    }

    pub fn mutation_one(&self) -> &Band {
        &self.bands[1]
    }

    pub fn mutation_two(&self) -> &Band {
        &self.bands[2]
    }

    pub fn crossover(&self) -> &Band {
        &self.bands[3]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        self.bands.iter()
    }

    /// Sum of all band sizes; equals the population size.
    pub fn total(&self) -> usize {
        self.bands.iter().map(|band| band.target.len()).sum()
    }
}

/// Fills this worker's share of every band of `next` from the ranked `current`.
///
/// Each child is placed with its target slot as index before mutation, so the
/// parity seen by `mutate_one` is the slot the child keeps after reindexing.
pub fn breed(
    bands: &Bands,
    current: &Population,
    next: &Population,
    generation: usize,
    worker: usize,
    workers: usize,
) {
    debug_assert_eq!(current.len(), bands.size());
    debug_assert_eq!(next.len(), bands.size());

    for band in bands.iter() {
        match band.operator {
            Operator::Crossover => {
                let pairs = partition(0, band.pairs(), worker, workers);
                tracing::trace!(worker, ?pairs, "crossover pairs");

                for pair in pairs {
                    let first = 2 * pair;
                    let parent1 = current.read(band.source.start + first);
                    let parent2 = current.read(band.source.start + first + 1);
                    let mut child1 = next.write(band.target.start + first);
                    let mut child2 = next.write(band.target.start + first + 1);

                    let slots = (band.target.start + first, band.target.start + first + 1);
                    child1.set_index(slots.0);
                    child2.set_index(slots.1);
                    crossover_into(&parent1, &parent2, &mut child1, &mut child2, generation);
                }

                if worker == workers - 1 {
                    if let Some((source, target)) = band.solo() {
                        next.write(target).inherit(&current.read(source), target);
                    }
                }
            }
            operator => {
                let offsets = partition(0, band.target.len(), worker, workers);
                tracing::trace!(worker, ?operator, ?offsets, "band share");

                for offset in offsets {
                    let target = band.target.start + offset;
                    let mut child = next.write(target);
                    child.inherit(&current.read(band.source.start + offset), target);

                    match operator {
                        Operator::MutationOne => mutate_one(&mut child, generation),
                        Operator::MutationTwo => mutate_two(&mut child, generation),
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Individual;

    fn ranked(size: usize) -> Population {
        let individuals = (0..size)
            .map(|slot| Individual::seeded(size, slot))
            .collect();
        Population::from_individuals(individuals)
    }

    fn breed_all(current: &Population, generation: usize, workers: usize) -> Vec<Individual> {
        let bands = Bands::new(current.len());
        let next = Population::new(current.len());
        for worker in 0..workers {
            breed(&bands, current, &next, generation, worker, workers);
        }
        next.snapshot()
    }

    #[test]
    fn test_band_sizes_sum_to_population() {
        for size in (10..=200).step_by(10) {
            let bands = Bands::new(size);
            assert_eq!(bands.total(), size);
            assert_eq!(bands.crossover().target.end, size);
        }
    }

    #[test]
    fn test_band_layout_for_ten() {
        let bands = Bands::new(10);

        assert_eq!(bands.elitism().source, 0..3);
        assert_eq!(bands.mutation_one().source, 0..2);
        assert_eq!(bands.mutation_one().target, 3..5);
        assert_eq!(bands.mutation_two().source, 2..4);
        assert_eq!(bands.mutation_two().target, 5..7);
        assert_eq!(bands.crossover().pairs(), 1);
        assert_eq!(bands.crossover().solo(), Some((9, 9)));
        assert_eq!(Bands::new(30).crossover().solo(), Some((29, 29)));
    }

    #[test]
    fn test_even_crossover_band_has_no_solo() {
        assert_eq!(Bands::new(20).crossover().solo(), None);
        assert_eq!(Bands::new(20).elitism().solo(), None);
    }

    #[test]
    fn test_breed_fills_every_slot() {
        let current = ranked(30);
        let next = breed_all(&current, 0, 4);

        assert_eq!(next.len(), 30);
        for (slot, child) in next.iter().enumerate() {
            assert_eq!(child.len(), 30);
            assert_eq!(child.index(), slot);
        }
    }

    #[test]
    fn test_elitism_copies_unchanged() {
        let current = ranked(10);
        let next = breed_all(&current, 3, 2);

        for slot in 0..3 {
            assert_eq!(next[slot].chromosome(), current.read(slot).chromosome());
        }
    }

    #[test]
    fn test_mutation_bands_apply_their_operator() {
        let current = ranked(10);
        let next = breed_all(&current, 1, 1);

        let mut expected = Individual::seeded(10, 0);
        expected.set_index(3);
        mutate_one(&mut expected, 1);
        assert_eq!(next[3].chromosome(), expected.chromosome());

        let mut expected = Individual::seeded(10, 2);
        expected.set_index(5);
        mutate_two(&mut expected, 1);
        assert_eq!(next[5].chromosome(), expected.chromosome());
    }

    #[test]
    fn test_solo_slot_copies_last_ranked() {
        for workers in [1, 2, 3, 8] {
            let current = ranked(10);
            let next = breed_all(&current, 0, workers);

            assert_eq!(next[9].chromosome(), current.read(9).chromosome());
            assert_eq!(next[9].selected_items(), vec![9]);
            assert_eq!(next[9].index(), 9);
        }
    }

    #[test]
    fn test_breed_is_independent_of_worker_count() {
        let current = ranked(40);
        let reference = breed_all(&current, 7, 1);

        for workers in [2, 3, 4, 8, 64] {
            assert_eq!(breed_all(&current, 7, workers), reference, "{} workers", workers);
        }
    }
}
