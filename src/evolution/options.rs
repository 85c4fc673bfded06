//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run configuration that is not part of the
//! problem instance: how many generations to evolve, how many worker threads share the
//! work, and how often the best fitness is reported.
//!
//! ## Example
//!
//! ```rust
//! use knapga::evolution::options::EvolutionOptions;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 4);
//! assert_eq!(custom_options.get_report_interval(), 5);
//!
//! // Or through the builder
//! let options = EvolutionOptions::builder()
//!     .num_generations(50)
//!     .num_threads(8)
//!     .report_interval(10)
//!     .build();
//! assert_eq!(options.get_num_threads(), 8);
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of generations to evolve.
//! - `num_threads`: The number of worker threads in the pool.
//! - `report_interval`: The best fitness is reported every `report_interval` generations.

use crate::error::{GeneticError, Result};

/// Default reporting period, in generations.
pub const DEFAULT_REPORT_INTERVAL: usize = 5;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOptions {
    num_generations: usize,
    num_threads: usize,
    report_interval: usize,
}

impl EvolutionOptions {
    pub fn new(num_generations: usize, num_threads: usize) -> Self {
        Self {
            num_generations,
            num_threads,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn get_report_interval(&self) -> usize {
        self.report_interval
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the number of worker threads.
    pub fn set_num_threads(&mut self, num_threads: usize) {
        self.num_threads = num_threads;
    }

    /// Sets the reporting period.
    pub fn set_report_interval(&mut self, report_interval: usize) {
        self.report_interval = report_interval;
    }

    /// Checks that a run with these options can start.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if there are zero generations, zero
    /// threads, or a zero reporting interval.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.num_threads == 0 {
            return Err(GeneticError::Configuration(
                "Number of threads cannot be zero".to_string(),
            ));
        }

        if self.report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the best fitness of `generation` is reported.
    pub fn is_report_due(&self, generation: usize) -> bool {
        self.report_interval != 0 && generation % self.report_interval == 0
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            num_threads: 1,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    num_threads: Option<usize>,
    report_interval: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the number of worker threads.
    pub fn num_threads(mut self, value: usize) -> Self {
        self.num_threads = Some(value);
        self
    }

    /// Sets the reporting period.
    pub fn report_interval(mut self, value: usize) -> Self {
        self.report_interval = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            num_threads: self.num_threads.unwrap_or(defaults.num_threads),
            report_interval: self.report_interval.unwrap_or(defaults.report_interval),
        }
    }
}
