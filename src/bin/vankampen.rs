//! Command-line front end for the three pipeline stages (`spec.md` §5):
//! `prepare`, `segments`, and `finish`, each reading/writing the
//! `.prep`/`.seg.<i>` snapshot files in [`vankampen::persistence`].

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vankampen::bivariate::parse::parse;
use vankampen::config::{Config, Verbosity};
use vankampen::persistence::{load_prepared, load_segment, prep_path, save_prepared, save_segment, segment_path};
use vankampen::{driver, Error};

#[derive(Parser)]
#[command(name = "vankampen", about = "Certified Zariski-Van Kampen fundamental group computation")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Use the adaptive heuristic monodromy follower instead of the
    /// certified Sturm-sequence one.
    #[arg(long, global = true)]
    approx: bool,

    /// Maximum Newton iterations per refinement step.
    #[arg(long, global = true, default_value_t = 800)]
    newton_limit: u32,

    /// Root-separation safety margin.
    #[arg(long, global = true, default_value_t = 100.0)]
    safety: f64,

    /// Print per-segment progress.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Read a curve, locate the loop graph and every fibre, write `<name>.prep`.
    Prepare {
        /// Textual curve expression in `x, y`, e.g. `"x^2 - y^3"`.
        curve: String,
        /// Base name for the produced `<name>.prep` file.
        name: String,
    },
    /// Compute every segment's monodromy braid from a `.prep` file, writing
    /// `<name>.seg.<i>` for each.
    Segments {
        /// Base name of an existing `<name>.prep` file.
        name: String,
    },
    /// Load a `.prep` file and its `.seg.<i>` files, compose the loop
    /// braids, and print the resulting presentation.
    Finish {
        /// Base name of an existing `<name>.prep` file and its segments.
        name: String,
    },
    /// Run all three stages in one invocation without touching disk,
    /// printing the final presentation.
    Run {
        /// Textual curve expression in `x, y`, e.g. `"x^2 - y^3"`.
        curve: String,
    },
}

fn config_from(cli: &Cli) -> Config {
    let verbosity = if cli.verbose { Verbosity::Segments } else { Verbosity::Silent };
    let config = Config::new().with_newton_limit(cli.newton_limit).with_safety(cli.safety).with_verbosity(verbosity);
    if cli.approx {
        config.approximate()
    } else {
        config.certified()
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let config = config_from(&cli);

    match &cli.command {
        Command::Prepare { curve, name } => {
            let curve = parse(curve)?;
            let prepared = driver::prepare(&curve, &config)?;
            save_prepared(prep_path(name), &prepared)?;
            println!(
                "prepared {name}: {} branch point(s), {} loop(s)",
                prepared.roots.len(),
                prepared.graph.loops.len()
            );
        }
        Command::Segments { name } => {
            let prepared = load_prepared(prep_path(name))?;
            let braids = driver::run_segments(&prepared, &config)?;
            for (i, braid) in braids.iter().enumerate() {
                save_segment(segment_path(name, i), braid)?;
            }
            println!("computed {} segment braid(s) for {name}", braids.len());
        }
        Command::Finish { name } => {
            let prepared = load_prepared(prep_path(name))?;
            let segment_count = prepared.graph.segments.len();
            let mut braids = Vec::with_capacity(segment_count);
            for i in 0..segment_count {
                braids.push(load_segment(segment_path(name, i))?);
            }
            let result = driver::finish(prepared, braids)?;
            println!("{}", result.presentation);
        }
        Command::Run { curve } => {
            let curve = parse(curve)?;
            let result = driver::run(&curve, &config)?;
            println!("{}", result.presentation);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
