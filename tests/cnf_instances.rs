//! Concrete scenarios and boundary behaviors, run across every recognized algorithm variant.
use dpll_sat::{solve, verify, Model, SolveOutcome, Variant};

fn all_variants() -> Vec<Variant> {
    vec![
        Variant::empty(),
        Variant::UNIT,
        Variant::PURE,
        Variant::UNIT | Variant::PURE,
        Variant::TWO_WATCHED,
        Variant::TWO_WATCHED_ITERATIVE,
        Variant::VSIDS,
        Variant::RESTARTS,
    ]
}

fn assert_sat_and_verifies(vars: &[&str], clauses: &[Vec<&str>]) -> Model {
    let mut last_model = None;
    for variant in all_variants() {
        let outcome = solve(vars, clauses.to_vec(), variant).unwrap();
        match outcome {
            SolveOutcome::Sat(model) => {
                assert!(verify(&decode(clauses), &model), "model failed to verify under {variant:?}");
                last_model = Some(model);
            }
            SolveOutcome::Unsat => panic!("{variant:?} reported unsatisfiable on a satisfiable instance"),
        }
    }
    last_model.unwrap()
}

fn assert_unsat_everywhere(vars: &[&str], clauses: &[Vec<&str>]) {
    for variant in all_variants() {
        let outcome = solve(vars, clauses.to_vec(), variant).unwrap();
        assert!(matches!(outcome, SolveOutcome::Unsat), "{variant:?} found a model for an unsatisfiable instance");
    }
}

fn decode(clauses: &[Vec<&str>]) -> Vec<Vec<(String, bool)>> {
    clauses
        .iter()
        .map(|clause| {
            clause
                .iter()
                .map(|tok| match tok.strip_prefix('-') {
                    Some(name) => (name.to_owned(), false),
                    None => (tok.to_string(), true),
                })
                .collect()
        })
        .collect()
}

#[test]
fn or_chain_is_satisfiable() {
    let clauses = vec![vec!["A", "B"], vec!["-A", "B"], vec!["-B", "C"]];
    let model = assert_sat_and_verifies(&["A", "B", "C"], &clauses);
    assert_eq!(model.get("C"), Some(true));
}

#[test]
fn contradictory_units_are_unsatisfiable() {
    assert_unsat_everywhere(&["A"], &[vec!["A"], vec!["-A"]]);
}

#[test]
fn forced_pair_conflict_is_unsatisfiable() {
    assert_unsat_everywhere(&["A", "B"], &[vec!["A", "B"], vec!["-A"], vec!["-B"]]);
}

#[test]
fn xor_like_formula_is_unsatisfiable() {
    let clauses = vec![vec!["A", "B"], vec!["-A", "B"], vec!["A", "-B"], vec!["-A", "-B"]];
    assert_unsat_everywhere(&["A", "B"], &clauses);
}

#[test]
fn chained_implications_are_satisfiable() {
    let clauses = vec![vec!["A"], vec!["-A", "B"], vec!["-B", "C"]];
    let model = assert_sat_and_verifies(&["A", "B", "C"], &clauses);
    assert_eq!(model.get("A"), Some(true));
    assert_eq!(model.get("B"), Some(true));
    assert_eq!(model.get("C"), Some(true));
}

#[test]
fn chain_plus_negated_tail_is_unsatisfiable() {
    let clauses = vec![vec!["A"], vec!["-A", "B"], vec!["-B", "C"], vec!["-C"]];
    assert_unsat_everywhere(&["A", "B", "C"], &clauses);
}

#[test]
fn empty_clause_list_is_satisfiable_with_empty_model() {
    let clauses: Vec<Vec<&str>> = vec![];
    for variant in all_variants() {
        let outcome = solve(&[], clauses.clone(), variant).unwrap();
        match outcome {
            SolveOutcome::Sat(model) => assert!(model.is_empty()),
            SolveOutcome::Unsat => panic!("{variant:?} rejected the empty clause list"),
        }
    }
}

#[test]
fn empty_clause_is_unsatisfiable() {
    let clauses: Vec<Vec<&str>> = vec![vec![]];
    assert_unsat_everywhere(&[], &clauses);
}

#[test]
fn single_literal_clause_commits_it() {
    for variant in all_variants() {
        let outcome = solve(&["A"], vec![vec!["A"]], variant).unwrap();
        match outcome {
            SolveOutcome::Sat(model) => assert_eq!(model.get("A"), Some(true)),
            SolveOutcome::Unsat => panic!("{variant:?} rejected a trivially satisfiable unit clause"),
        }
    }
}

#[test]
fn duplicate_literals_in_a_clause_behave_as_one() {
    let clauses = vec![vec!["A", "A", "B"], vec!["-A"]];
    let model = assert_sat_and_verifies(&["A", "B"], &clauses);
    assert_eq!(model.get("B"), Some(true));
}
