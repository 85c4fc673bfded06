//! # Rendezvous
//!
//! The barrier every worker passes between two phases of a generation. Besides the
//! barrier itself it carries an abort flag: a worker that fails raises the flag and
//! arrives once more, so its peers leave at that barrier instead of waiting forever
//! for an arrival that will never come.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Barrier;

use crate::error::{GeneticError, Result};

#[derive(Debug)]
pub struct Rendezvous {
    barrier: Barrier,
    aborted: AtomicBool,
    workers: usize,
}

impl Rendezvous {
    pub fn new(workers: usize) -> Self {
        Self {
            barrier: Barrier::new(workers),
            aborted: AtomicBool::new(false),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Blocks until every worker arrives.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Aborted` if a worker aborted before this barrier opened.
    pub fn wait(&self) -> Result<()> {
        self.barrier.wait();
        if self.aborted.load(Ordering::Acquire) {
            return Err(GeneticError::Aborted);
        }
        Ok(())
    }

    /// Raises the abort flag and takes the place of the failing worker at the next barrier.
    pub fn abort(&self) {
        self.raise();
        self.barrier.wait();
    }

    /// Raises the abort flag without arriving at a barrier.
    ///
    /// Only for failures after the last barrier of a run, when no peer waits anymore.
    pub fn raise(&self) {
        self.aborted.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }
}
