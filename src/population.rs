//! # Population
//!
//! A fixed-size buffer of individuals shared by all workers of a run. Every slot is
//! guarded by its own lock. Workers only touch the slots the partitioner hands them
//! for the current phase, so the locks are never contended; the coordinator takes
//! every slot at once only while all other workers wait at a barrier.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::individual::Individual;
use crate::ranking;

#[derive(Debug)]
pub struct Population {
    slots: Vec<RwLock<Individual>>,
}

impl Population {
    /// Allocates `size` empty-sack individuals of `size` genes, slot `i` holding index `i`.
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size)
                .map(|index| RwLock::new(Individual::empty(size, index)))
                .collect(),
        }
    }

    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            slots: individuals.into_iter().map(RwLock::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared access to slot `index`.
    ///
    /// A lock poisoned by a panicking worker is still readable; the run is aborted
    /// through the rendezvous, not through the slot.
    pub fn read(&self, index: usize) -> RwLockReadGuard<'_, Individual> {
        self.slots[index]
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to slot `index`.
    pub fn write(&self, index: usize) -> RwLockWriteGuard<'_, Individual> {
        self.slots[index]
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sorts the whole population best first. Must not overlap with any other
    /// access to this population.
    pub fn rank(&self) {
        let mut individuals: Vec<Individual> = self
            .slots
            .iter()
            .map(|slot| std::mem::take(&mut *slot.write().unwrap_or_else(PoisonError::into_inner)))
            .collect();

        ranking::rank(&mut individuals);

        for (slot, individual) in self.slots.iter().zip(individuals) {
            *slot.write().unwrap_or_else(PoisonError::into_inner) = individual;
        }
    }

    /// The first individual with the highest fitness.
    pub fn best(&self) -> Option<Individual> {
        let mut best: Option<RwLockReadGuard<'_, Individual>> = None;
        for index in 0..self.slots.len() {
            let candidate = self.read(index);
            if best
                .as_ref()
                .map_or(true, |current| candidate.fitness() > current.fitness())
            {
                best = Some(candidate);
            }
        }
        best.map(|guard| (*guard).clone())
    }

    /// Clones every individual in slot order.
    pub fn snapshot(&self) -> Vec<Individual> {
        (0..self.slots.len())
            .map(|index| self.read(index).clone())
            .collect()
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.slots
            .into_iter()
            .map(|slot| slot.into_inner().unwrap_or_else(PoisonError::into_inner))
            .collect()
    }
}
