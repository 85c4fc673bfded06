//! # Reporter
//!
//! The hook through which a run publishes its progress. The coordinator calls
//! [`Reporter::generation`] for every generation that is due (by default every fifth,
//! starting with generation zero) and [`Reporter::finished`] once with the best fitness
//! of the final population.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Best fitness of one ranked generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: u64,
}

pub trait Reporter: Send + Sync {
    fn generation(&self, generation: usize, best_fitness: u64);

    fn finished(&self, best_fitness: u64);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn generation(&self, generation: usize, best_fitness: u64) {
        (**self).generation(generation, best_fitness)
    }

    fn finished(&self, best_fitness: u64) {
        (**self).finished(best_fitness)
    }
}

/// Publishes progress as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn generation(&self, generation: usize, best_fitness: u64) {
        tracing::info!(generation, best_fitness, "generation ranked");
    }

    fn finished(&self, best_fitness: u64) {
        tracing::info!(best_fitness, "evolution finished");
    }
}

/// Writes every reported fitness as one integer per line.
#[derive(Debug)]
pub struct WriterReporter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, value: u64) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(writer, "{}", value).and_then(|_| writer.flush()) {
            tracing::warn!(%err, "cannot write fitness");
        }
    }
}

impl<W: Write + Send> Reporter for WriterReporter<W> {
    fn generation(&self, _generation: usize, best_fitness: u64) {
        self.write_line(best_fitness);
    }

    fn finished(&self, best_fitness: u64) {
        self.write_line(best_fitness);
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    generations: Mutex<Vec<GenerationReport>>,
    finished: Mutex<Option<u64>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generations(&self) -> Vec<GenerationReport> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn final_fitness(&self) -> Option<u64> {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for MemoryReporter {
    fn generation(&self, generation: usize, best_fitness: u64) {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(GenerationReport {
                generation,
                best_fitness,
            });
    }

    fn finished(&self, best_fitness: u64) {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner) = Some(best_fitness);
    }
}
