//! Encodes a classic 9x9 Sudoku puzzle as CNF and checks the engine recovers the unique solution.
use dpll_sat::{solve, SolveOutcome, Variant};

const SIZE: usize = 9;
const BOX: usize = 3;

fn cell_var(r: usize, c: usize, n: usize) -> String {
    format!("{r}-{c}-{n}")
}

/// The base Sudoku constraints, independent of any particular puzzle's clues: every cell holds
/// at least one digit, no cell holds two digits, and every digit appears exactly once per row,
/// column, and 3x3 box.
fn base_clauses() -> Vec<Vec<String>> {
    let mut clauses = Vec::new();

    for r in 0..SIZE {
        for c in 0..SIZE {
            clauses.push((1..=SIZE).map(|n| cell_var(r, c, n)).collect());
            for n1 in 1..=SIZE {
                for n2 in (n1 + 1)..=SIZE {
                    clauses.push(vec![format!("-{}", cell_var(r, c, n1)), format!("-{}", cell_var(r, c, n2))]);
                }
            }
        }
    }

    for n in 1..=SIZE {
        for r in 0..SIZE {
            clauses.push((0..SIZE).map(|c| cell_var(r, c, n)).collect());
            for c1 in 0..SIZE {
                for c2 in (c1 + 1)..SIZE {
                    clauses.push(vec![format!("-{}", cell_var(r, c1, n)), format!("-{}", cell_var(r, c2, n))]);
                }
            }
        }
        for c in 0..SIZE {
            clauses.push((0..SIZE).map(|r| cell_var(r, c, n)).collect());
            for r1 in 0..SIZE {
                for r2 in (r1 + 1)..SIZE {
                    clauses.push(vec![format!("-{}", cell_var(r1, c, n)), format!("-{}", cell_var(r2, c, n))]);
                }
            }
        }
    }

    for br in 0..BOX {
        for bc in 0..BOX {
            for n in 1..=SIZE {
                let cells: Vec<(usize, usize)> = (0..BOX)
                    .flat_map(|ro| (0..BOX).map(move |co| (br * BOX + ro, bc * BOX + co)))
                    .collect();
                clauses.push(cells.iter().map(|&(r, c)| cell_var(r, c, n)).collect());
                for i in 0..cells.len() {
                    for j in (i + 1)..cells.len() {
                        let (r1, c1) = cells[i];
                        let (r2, c2) = cells[j];
                        clauses.push(vec![format!("-{}", cell_var(r1, c1, n)), format!("-{}", cell_var(r2, c2, n))]);
                    }
                }
            }
        }
    }

    clauses
}

/// 0 marks a blank cell.
const EXAMPLE_BOARD: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

fn is_valid_solution(board: &[[u8; 9]; 9]) -> bool {
    let group_is_permutation = |values: Vec<u8>| {
        let mut seen = [false; 10];
        for v in values {
            if v == 0 || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    };

    for r in 0..SIZE {
        if !group_is_permutation(board[r].to_vec()) {
            return false;
        }
    }
    for c in 0..SIZE {
        if !group_is_permutation((0..SIZE).map(|r| board[r][c]).collect()) {
            return false;
        }
    }
    for br in 0..BOX {
        for bc in 0..BOX {
            let cells = (0..BOX)
                .flat_map(|ro| (0..BOX).map(move |co| board[br * BOX + ro][bc * BOX + co]))
                .collect();
            if !group_is_permutation(cells) {
                return false;
            }
        }
    }
    true
}

#[test]
fn solves_the_classic_example_board() {
    let mut clauses = base_clauses();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let clue = EXAMPLE_BOARD[r][c];
            if clue != 0 {
                clauses.push(vec![cell_var(r, c, clue as usize)]);
            }
        }
    }

    let mut variables: Vec<String> = Vec::new();
    for r in 0..SIZE {
        for c in 0..SIZE {
            for n in 1..=SIZE {
                variables.push(cell_var(r, c, n));
            }
        }
    }
    let variable_refs: Vec<&str> = variables.iter().map(String::as_str).collect();

    let model = match solve(&variable_refs, clauses, Variant::UNIT).unwrap() {
        SolveOutcome::Sat(model) => model,
        SolveOutcome::Unsat => panic!("the classic example board is satisfiable"),
    };

    let mut board = [[0u8; 9]; 9];
    for r in 0..SIZE {
        for c in 0..SIZE {
            for n in 1..=SIZE {
                if model.get(&cell_var(r, c, n)) == Some(true) {
                    board[r][c] = n as u8;
                }
            }
        }
    }

    assert!(is_valid_solution(&board), "decoded board is not a valid Sudoku solution: {board:?}");

    for r in 0..SIZE {
        for c in 0..SIZE {
            let clue = EXAMPLE_BOARD[r][c];
            if clue != 0 {
                assert_eq!(board[r][c], clue, "clue at ({r}, {c}) was overwritten");
            }
        }
    }
}
