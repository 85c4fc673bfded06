//! A command line interface to the knapsack genetic algorithm.
//!
//! ```text
//! knapga <instance> <generations> <threads> [--verbose]
//! ```
//!
//! Prints the best fitness of every fifth generation and then the best fitness of
//! the final population, one integer per line.

use std::io::stdout;
use std::process;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use knapga::evolution::{EvolutionLauncher, EvolutionOptions, WriterReporter};
use knapga::instance::Instance;
use tracing::Level;

const INSTANCE_ARG_NAME: &str = "instance";
const GENERATIONS_ARG_NAME: &str = "generations";
const THREADS_ARG_NAME: &str = "threads";
const VERBOSE_ARG_NAME: &str = "verbose";

fn get_app() -> Command {
    Command::new("knapga")
        .about(
            "Evolves solutions to a 0/1 knapsack instance with a deterministic parallel \
             genetic algorithm",
        )
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Path to the instance file: 'N capacity' followed by N 'profit weight' rows")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Number of generations to evolve")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Number of worker threads")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Log every generation to stderr")
                .short('v')
                .long(VERBOSE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<T, String> {
    matches
        .get_one::<String>(arg_name)
        .ok_or_else(|| format!("missing {arg_desc}"))
        .and_then(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'"))
        })
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let path = matches
        .get_one::<String>(INSTANCE_ARG_NAME)
        .ok_or("missing instance path")?;
    let generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "generations count")?;
    let threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads number")?;

    let instance =
        Instance::load(path).map_err(|err| format!("cannot load instance '{path}': {err}"))?;
    let options = EvolutionOptions::builder()
        .num_generations(generations)
        .num_threads(threads)
        .build();

    EvolutionLauncher::new(WriterReporter::new(stdout()))
        .evolve(&instance, &options)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

fn main() {
    let matches = get_app().get_matches();

    let level = if matches.get_flag(VERBOSE_ARG_NAME) {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
