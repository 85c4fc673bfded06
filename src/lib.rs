pub mod breeding;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod instance;
pub mod partition;
pub mod population;
pub mod ranking;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, Reporter};
pub use individual::Individual;
pub use instance::{Instance, Item};
