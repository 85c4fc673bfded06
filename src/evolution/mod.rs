pub mod launcher;
pub mod options;
pub mod rendezvous;
pub mod report;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use rendezvous::Rendezvous;
pub use report::{GenerationReport, MemoryReporter, Reporter, TracingReporter, WriterReporter};
