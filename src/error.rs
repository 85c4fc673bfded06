//! # Error Types
//!
//! This module defines the error type shared by the whole crate. It covers
//! invalid configuration, malformed problem instances, and failures of the
//! worker pool that drives the evolution.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapga::error::{GeneticError, Result};
//!
//! fn validate(population_size: usize) -> Result<()> {
//!     if population_size % 10 != 0 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Population size {} is not divisible by 10",
//!             population_size
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate(20).is_ok());
//! assert!(validate(15).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use knapga::error::{Result, ResultExt};
//!
//! fn parse_count(token: &str) -> Result<usize> {
//!     token.parse::<usize>().context("Failed to parse item count")
//! }
//!
//! assert!(parse_count("10").is_ok());
//! assert!(parse_count("ten").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use knapga::error::{GeneticError, OptionExt};
//!
//! fn best(fitness: &[u64]) -> knapga::error::Result<u64> {
//!     fitness.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best(&[3, 9, 4]).unwrap(), 9);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while loading an instance or evolving a population.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a knapsack instance cannot be parsed or violates its format.
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The pool could not start the worker with the given ordinal.
    #[error("Failed to spawn worker {worker}: {reason}")]
    WorkerSpawn { worker: usize, reason: String },

    /// The worker with the given ordinal panicked; the generation it was part of is lost.
    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    /// A peer worker failed and this worker left the run at the next barrier.
    #[error("Run aborted by a failing peer worker")]
    Aborted,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// Converts any standard error into a `GeneticError::Other` carrying the
/// provided context in front of the original message.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
