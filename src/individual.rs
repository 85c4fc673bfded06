//! # Individual
//!
//! A candidate knapsack solution. The chromosome holds one gene per item; gene `j`
//! set means item `j` is in the sack. Fitness and the number of items taken are
//! derived from the chromosome by [`Individual::evaluate`] and are recomputed every
//! generation.
//!
//! ## Example
//!
//! ```rust
//! use knapga::individual::Individual;
//! use knapga::instance::Instance;
//!
//! let instance = Instance::new([(10, 4), (7, 3), (5, 9)], 8);
//! let mut individual = Individual::new(vec![true, true, false], 0);
//! individual.evaluate(&instance);
//!
//! assert_eq!(individual.fitness(), 17);
//! assert_eq!(individual.objects_taken(), 2);
//! ```

use crate::instance::Instance;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Individual {
    chromosome: Vec<bool>,
    fitness: u64,
    objects_taken: usize,
    index: usize,
}

impl Individual {
    /// Creates an individual with the given genes occupying slot `index`.
    /// Derived fields stay zero until the next evaluation.
    pub fn new(chromosome: Vec<bool>, index: usize) -> Self {
        Self {
            chromosome,
            fitness: 0,
            objects_taken: 0,
            index,
        }
    }

    /// An empty-sack individual of `len` genes occupying slot `index`.
    pub fn empty(len: usize, index: usize) -> Self {
        Self::new(vec![false; len], index)
    }

    /// The generation-zero individual: only the item matching its own slot is taken.
    pub fn seeded(len: usize, index: usize) -> Self {
        let mut individual = Self::empty(len, index);
        individual.chromosome[index] = true;
        individual
    }

    /// Recomputes fitness and the item count from the chromosome.
    ///
    /// Fitness is the summed profit when the summed weight fits the capacity and
    /// zero otherwise, so infeasible individuals stay in the population but never
    /// outrank a feasible one with profit.
    pub fn evaluate(&mut self, instance: &Instance) {
        debug_assert_eq!(self.chromosome.len(), instance.len());

        let (profit, weight, taken) = self
            .chromosome
            .iter()
            .zip(instance.items())
            .filter(|(gene, _)| **gene)
            .fold((0u64, 0u64, 0usize), |(profit, weight, taken), (_, item)| {
                (
                    profit.saturating_add(item.profit),
                    weight.saturating_add(item.weight),
                    taken + 1,
                )
            });

        self.objects_taken = taken;
        self.fitness = if weight <= instance.capacity() {
            profit
        } else {
            0
        };
    }

    /// Summed weight of the selected items.
    pub fn weight(&self, instance: &Instance) -> u64 {
        self.chromosome
            .iter()
            .zip(instance.items())
            .filter(|(gene, _)| **gene)
            .fold(0u64, |weight, (_, item)| weight.saturating_add(item.weight))
    }

    pub fn chromosome(&self) -> &[bool] {
        &self.chromosome
    }

    pub(crate) fn chromosome_mut(&mut self) -> &mut [bool] {
        &mut self.chromosome
    }

    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    pub fn objects_taken(&self) -> usize {
        self.objects_taken
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Copies the genes of `other` into this individual, which moves to slot `index`.
    pub(crate) fn inherit(&mut self, other: &Individual, index: usize) {
        self.chromosome.clone_from(&other.chromosome);
        self.index = index;
    }

    /// Indices of the items in the sack.
    pub fn selected_items(&self) -> Vec<usize> {
        self.chromosome
            .iter()
            .enumerate()
            .filter_map(|(idx, gene)| gene.then_some(idx))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance {
        Instance::new([(60, 10), (100, 20), (120, 30), (50, 5)], 50)
    }

    #[test]
    fn test_seeded_takes_only_its_own_item() {
        let individual = Individual::seeded(4, 2);

        assert_eq!(individual.chromosome(), &[false, false, true, false]);
        assert_eq!(individual.index(), 2);
        assert_eq!(individual.selected_items(), vec![2]);
    }

    #[test]
    fn test_evaluate_feasible() {
        let mut individual = Individual::new(vec![true, false, true, true], 0);
        individual.evaluate(&instance());

        assert_eq!(individual.fitness(), 230);
        assert_eq!(individual.objects_taken(), 3);
        assert_eq!(individual.weight(&instance()), 45);
    }

    #[test]
    fn test_evaluate_exact_capacity_is_feasible() {
        let mut individual = Individual::new(vec![false, true, true, false], 0);
        individual.evaluate(&instance());

        assert_eq!(individual.fitness(), 220);
    }

    #[test]
    fn test_evaluate_overweight_is_zeroed() {
        let mut individual = Individual::new(vec![true, true, true, true], 0);
        individual.evaluate(&instance());

        assert_eq!(individual.fitness(), 0);
        assert_eq!(individual.objects_taken(), 4);
    }

    #[test]
    fn test_evaluate_overwrites_stale_values() {
        let mut individual = Individual::new(vec![true, true, true, true], 0);
        individual.evaluate(&instance());
        individual.chromosome_mut()[0] = false;
        individual.chromosome_mut()[1] = false;
        individual.evaluate(&instance());

        assert_eq!(individual.fitness(), 170);
        assert_eq!(individual.objects_taken(), 2);
    }

    #[test]
    fn test_inherit_copies_genes_and_moves_slot() {
        let parent = Individual::seeded(4, 1);
        let mut child = Individual::empty(4, 3);
        child.inherit(&parent, 2);

        assert_eq!(child.chromosome(), parent.chromosome());
        assert_eq!(child.index(), 2);
    }
}
