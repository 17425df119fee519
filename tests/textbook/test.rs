use approx::assert_abs_diff_eq;
use num_traits::Zero;

use bigm::algorithm::big_m::{Options, solve, solve_with, SolverRun, State, Step};
use bigm::algorithm::big_m::strategy::pivot_rule::{FirstProfitable, SmallestRelativeCost};
use bigm::data::linear_program::elements::ColumnKind;
use bigm::data::number_types::extended::ExtendedNumber;
use bigm::error::LinearProgramError;

use super::{blend, infeasible, production, shared_row, unbounded};

#[test]
fn production_optimum() {
    let solution = solve(&production()).unwrap();

    assert_eq!(solution.objective_value(), 1_110_000_f64);
    assert_eq!(solution.values(), &[
        (1, 5000_f64),
        (2, 5500_f64),
        (4, 1500_f64),
        (3, 0_f64),
        (5, 0_f64),
    ]);
    assert_eq!(solution.basic_variables(), &[1, 2, 4]);
    assert_eq!(solution.non_basic_variables(), &[3, 5]);
    assert!(solution.nr_iterations() <= 3);
}

#[test]
fn production_report() {
    let solution = solve(&production()).unwrap();

    assert_eq!(
        solution.to_string(),
        concat!(
            "Iterations: 3\n",
            "Optimal value: 1110000\n",
            "Solution: x1 = 5000, x2 = 5500, x4 = 1500, x3 = 0, x5 = 0\n",
            "Basic variables: x1, x2, x4\n",
            "Non-basic variables: x3, x5",
        ),
    );
}

#[test]
fn blend_initial_tableau() {
    let problem = blend();
    let run = SolverRun::new(&problem);
    let tableau = run.tableau();

    // 2 structural, 3 + 2 auxiliary, z and b
    assert_eq!(tableau.nr_columns(), 9);
    assert_eq!(tableau.nr_rows(), 3);
    assert_eq!(tableau.column_kinds(), &[
        ColumnKind::Objective,
        ColumnKind::Structural(0),
        ColumnKind::Structural(1),
        ColumnKind::Artificial(0),
        ColumnKind::Surplus(1),
        ColumnKind::Artificial(1),
        ColumnKind::Slack(2),
        ColumnKind::Unused,
        ColumnKind::RightHandSide,
    ]);
    assert_eq!(tableau.relative_cost(3), ExtendedNumber::BIG_M);
    assert_eq!(tableau.relative_cost(5), ExtendedNumber::BIG_M);
    assert_eq!(tableau.basis_row(3), Some(0));
    assert_eq!(tableau.basis_row(5), Some(1));
    assert_eq!(tableau.basis_row(6), Some(2));
    assert_eq!(tableau.basis_row(4), None);
    assert!(tableau.constraint_rows().iter().all(|row| row[7].is_zero()));
}

#[test]
fn blend_optimum() {
    let problem = blend();
    let mut run = SolverRun::new(&problem);

    assert_eq!(run.step(), Ok(Step::Pivoted { row: 1, column: 2 }));
    assert_eq!(run.step(), Ok(Step::Pivoted { row: 0, column: 1 }));
    assert_eq!(run.step(), Ok(Step::Optimal));

    let solution = run.solution();
    assert_abs_diff_eq!(solution.objective_value(), 11_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.objective().penalty_part(), 0_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(1).unwrap(), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(2).unwrap(), 1_f64, epsilon = 1e-9);
    for artificial in [3, 5] {
        assert!(solution.non_basic_variables().contains(&artificial));
        assert_eq!(solution.value(artificial), Some(0_f64));
    }
}

#[test]
fn blend_other_pivot_rule() {
    let solution = solve_with::<FirstProfitable>(&blend(), Options::default()).unwrap();

    assert_abs_diff_eq!(solution.objective_value(), 11_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(1).unwrap(), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(2).unwrap(), 1_f64, epsilon = 1e-9);
}

#[test]
fn unbounded_is_reported() {
    let problem = unbounded();
    let mut run = SolverRun::<SmallestRelativeCost>::with_options(&problem, Options::default());

    let result = run.run();
    assert_eq!(result, Err(LinearProgramError::Unbounded { column: 2 }));
    assert_eq!(run.state(), State::Unbounded { column: 2 });
    assert_eq!(
        result.unwrap_err().to_string(),
        "The problem is unbounded: no row has a positive coefficient in entering column 2.",
    );
}

#[test]
fn iteration_limit() {
    let result = solve_with::<SmallestRelativeCost>(
        &production(),
        Options::default().max_iterations(Some(1)),
    );

    assert_eq!(result, Err(LinearProgramError::IterationLimitExceeded(1)));
}

#[test]
fn artificial_leaves_shared_row() {
    let problem = shared_row();
    for price_out in [false, true] {
        let options = Options::default().price_out_artificials(price_out);
        let solution = solve_with::<SmallestRelativeCost>(&problem, options).unwrap();

        assert_eq!(solution.objective_value(), 7_f64);
        assert_eq!(solution.basic_variables(), &[1, 2]);
        assert!(solution.basic_variables().len() <= problem.nr_constraints());
        assert!(solution.non_basic_variables().contains(&3));
        assert_eq!(solution.value(1), Some(3_f64));
        assert_eq!(solution.value(2), Some(1_f64));
        assert_eq!(solution.value(3), Some(0_f64));
        assert!(solution.is_feasible());
    }
}

#[test]
fn infeasible_is_not_called_optimal() {
    let solution = solve(&infeasible()).unwrap();

    assert!(!solution.is_feasible());
    assert_eq!(solution.objective(), ExtendedNumber::new(3_f64, -2_f64));
    assert!(!solution.to_string().contains("Optimal value"));
    assert!(solution.to_string().contains("Objective value: 3 - 2M"));
}
