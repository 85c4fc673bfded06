use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, trace};

use super::{options::EvolutionOptions, rendezvous::Rendezvous, report::Reporter};
use crate::{
    breeding::{self, Bands},
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    instance::Instance,
    partition::partition,
    population::Population,
};

/// Outcome of a run: the fittest individual of the final population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The first individual of the final population with the highest fitness.
    pub best: Individual,
    /// Its fitness.
    pub best_fitness: u64,
    /// Number of generations evolved.
    pub generations: usize,
}

/// Everything a worker needs for one run; shared by reference across the pool.
struct Run<'a, R: Reporter> {
    instance: &'a Instance,
    options: &'a EvolutionOptions,
    reporter: &'a R,
    bands: Bands,
    buffers: [Population; 2],
    rendezvous: Rendezvous,
}

/// Evolves knapsack populations on a fixed pool of worker threads.
///
/// All workers run the same phase sequence and meet at a barrier between phases:
///
/// 1. evaluate fitness of their partition of the current population,
/// 2. the coordinator (worker 0) ranks the whole population,
/// 3. build their share of the next population,
/// 4. swap buffers and reindex their partition,
/// 5. the coordinator reports the best fitness when due.
///
/// The partition a worker receives depends only on its logical index, so the result
/// is the same for every thread count.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> EvolutionLauncher<R> {
    /// Creates a new `EvolutionLauncher` publishing progress through `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Evolves a population for `instance` and returns the fittest final individual.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The instance size is zero or not divisible by 10
    /// - The options have zero generations, threads, or report interval
    /// - A worker thread cannot be spawned (the error names its ordinal)
    /// - A worker panics (the error names its ordinal)
    pub fn evolve(
        &self,
        instance: &Instance,
        options: &EvolutionOptions,
    ) -> Result<EvolutionResult> {
        validate(instance, options)?;

        let size = instance.len();
        let workers = options.get_num_threads();
        info!(
            population = size,
            capacity = instance.capacity(),
            generations = options.get_num_generations(),
            workers,
            "starting evolution"
        );

        let pool = build_pool(workers)?;
        let run = Run {
            instance,
            options,
            reporter: &self.reporter,
            bands: Bands::new(size),
            buffers: [Population::new(size), Population::new(size)],
            rendezvous: Rendezvous::new(workers),
        };

        let outcomes = pool.broadcast(|context| run.worker(context.index()));

        let mut best = None;
        for outcome in outcomes {
            match outcome {
                Ok(Some(individual)) => best = Some(individual),
                Ok(None) => {}
                Err(GeneticError::Aborted) => {}
                Err(err) => return Err(err),
            }
        }

        if run.rendezvous.is_aborted() {
            return Err(GeneticError::Aborted);
        }

        let best = best.ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let best_fitness = best.fitness();
        self.reporter.finished(best_fitness);
        info!(best_fitness, "evolution finished");

        Ok(EvolutionResult {
            best,
            best_fitness,
            generations: options.get_num_generations(),
        })
    }
}

fn validate(instance: &Instance, options: &EvolutionOptions) -> Result<()> {
    if instance.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if instance.len() % 10 != 0 {
        return Err(GeneticError::Configuration(format!(
            "Population size {} is not divisible by 10",
            instance.len()
        )));
    }

    options.validate()
}

/// Creates the worker pool, naming threads by their logical index.
fn build_pool(workers: usize) -> Result<ThreadPool> {
    let mut failed = None;

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .spawn_handler(|thread| {
            let worker = thread.index();
            std::thread::Builder::new()
                .name(format!("knapga-worker-{}", worker))
                .spawn(move || thread.run())
                .map(|_| ())
                .inspect_err(|_| failed = Some(worker))
        })
        .build();

    pool.map_err(|err| GeneticError::WorkerSpawn {
        worker: failed.unwrap_or_default(),
        reason: err.to_string(),
    })
}

impl<R: Reporter> Run<'_, R> {
    /// Runs the whole schedule for one logical worker.
    ///
    /// Returns the fittest final individual on the coordinator and `None` elsewhere.
    /// A panic before the last barrier stands in for the worker at the next barrier;
    /// past it every peer is already gone, so only the abort flag is raised.
    fn worker(&self, worker: usize) -> Result<Option<Individual>> {
        let span = tracing::debug_span!("worker", worker);
        let _enter = span.enter();

        let mut released = false;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let current = self.generations(worker)?;
            released = true;
            if worker != 0 {
                return Ok(None);
            }
            self.buffers[current]
                .best()
                .map(Some)
                .ok_or(GeneticError::EmptyPopulation)
        }));

        outcome.unwrap_or_else(|_| {
            tracing::error!(worker, "worker panicked, aborting run");
            if released {
                self.rendezvous.raise();
            } else {
                self.rendezvous.abort();
            }
            Err(GeneticError::WorkerPanicked { worker })
        })
    }

    /// Seeds, evolves every generation and evaluates the final population.
    ///
    /// Returns which buffer holds the final population.
    fn generations(&self, worker: usize) -> Result<usize> {
        let size = self.instance.len();
        let workers = self.rendezvous.workers();
        let coordinator = worker == 0;
        let own = partition(0, size, worker, workers);
        trace!(?own, "partition");

        let (mut current, mut next) = (0, 1);

        for index in own.clone() {
            *self.buffers[current].write(index) = Individual::seeded(size, index);
        }

        for generation in 0..self.options.get_num_generations() {
            self.evaluate(&self.buffers[current], own.clone());
            self.rendezvous.wait()?;

            let mut ranked_best = None;
            if coordinator {
                self.buffers[current].rank();
                let best = self.buffers[current].read(0).fitness();
                debug!(generation, best, "population ranked");
                ranked_best = Some(best);
            }
            self.rendezvous.wait()?;

            breeding::breed(
                &self.bands,
                &self.buffers[current],
                &self.buffers[next],
                generation,
                worker,
                workers,
            );
            std::mem::swap(&mut current, &mut next);
            self.rendezvous.wait()?;

            for index in own.clone() {
                self.buffers[current].write(index).set_index(index);
            }
            self.rendezvous.wait()?;

            if let Some(best) = ranked_best {
                if self.options.is_report_due(generation) {
                    self.reporter.generation(generation, best);
                }
            }
        }

        self.evaluate(&self.buffers[current], own);
        self.rendezvous.wait()?;

        Ok(current)
    }

    fn evaluate(&self, population: &Population, own: Range<usize>) {
        for index in own {
            population.write(index).evaluate(self.instance);
        }
    }
}
