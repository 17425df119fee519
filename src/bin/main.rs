use std::process::exit;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use bigm::algorithm::big_m::{Options, SolverRun, Step};
use bigm::algorithm::big_m::strategy::pivot_rule::SmallestRelativeCost;
use bigm::data::linear_program::elements::ConstraintType;
use bigm::data::linear_program::problem::{Constraint, Problem};
use bigm::error::LinearProgramError;

/// Solve a small linear program with the Big-M simplex method and show how it got there.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Built-in problem to solve
    #[arg(value_enum, default_value_t = Instance::Production)]
    problem: Instance,
    /// Print the tableau after every iteration
    #[arg(long)]
    trace: bool,
    /// Give up after this many iterations
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Iterate on the tableau as constructed, without pricing out the artificial variables
    #[arg(long)]
    no_price_out: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Instance {
    /// Two products sharing a budget, only `<=` constraints
    Production,
    /// A blend with an `=` and a `>=` constraint
    Blend,
    /// An objective that can grow without limit
    Unbounded,
}

impl Instance {
    fn problem(self) -> Result<Problem, LinearProgramError> {
        match self {
            Instance::Production => Problem::new(
                vec![90_f64, 120_f64],
                vec![
                    Constraint::new(vec![1_f64, 0_f64], ConstraintType::Less, 5000_f64)?,
                    Constraint::new(vec![0_f64, 1_f64], ConstraintType::Less, 7000_f64)?,
                    Constraint::new(vec![50_f64, 100_f64], ConstraintType::Less, 800_000_f64)?,
                ],
            ),
            Instance::Blend => Problem::new(
                vec![3_f64, 2_f64],
                vec![
                    Constraint::from_symbol(vec![1_f64, 1_f64], "=", 4_f64)?,
                    Constraint::from_symbol(vec![1_f64, 3_f64], ">=", 6_f64)?,
                    Constraint::from_symbol(vec![1_f64, 0_f64], "<=", 3_f64)?,
                ],
            ),
            Instance::Unbounded => Problem::new(
                vec![1_f64, 0_f64],
                vec![Constraint::new(vec![1_f64, -1_f64], ConstraintType::Less, 10_f64)?],
            ),
        }
    }
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    if let Err(error) = run(&opts) {
        eprintln!("{error}");
        exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), LinearProgramError> {
    let problem = opts.problem.problem()?;
    let options = Options::default()
        .max_iterations(opts.max_iterations)
        .price_out_artificials(!opts.no_price_out);

    let start = Instant::now();
    let mut run = SolverRun::<SmallestRelativeCost>::with_options(&problem, options);
    println!("Initial tableau:\n{}", run.tableau());

    while let Step::Pivoted { row, column } = run.step()? {
        if opts.trace {
            println!("Iteration {}, pivot on row {row} and column {column}:\n{}", run.nr_iterations(), run.tableau());
        }
    }
    let elapsed = start.elapsed();

    println!("Final tableau:\n{}", run.tableau());
    println!("Solved in {:.3} ms", elapsed.as_secs_f64() * 1000_f64);
    println!("{}", run.solution());

    Ok(())
}
