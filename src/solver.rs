use crate::board::Board;
use crate::{validator, Result, SudokuError};
use tracing::{debug, trace};

/// Solves a board by interleaving candidate propagation (naked and hidden
/// singles) with minimum-remaining-values backtracking search.
pub struct Solver {
    board: Board,
    branches: u64,
}

impl Solver {
    pub fn new(board: Board) -> Self {
        Self { board, branches: 0 }
    }

    /// Runs propagation to a fixed point, falling back to backtracking
    /// search when no further deduction is possible. On success returns the
    /// solved board; on failure the solver's board is restored to the
    /// original input before `Unsolvable` is reported.
    pub fn solve(&mut self) -> Result<Board> {
        let snapshot = self.board.clone();
        debug!(
            "Solving {0}×{0} board, {1} empty cells",
            self.board.size(),
            count_empty(&self.board)
        );

        if self.run() {
            debug!("Solved after {} branch trials", self.branches);
            Ok(self.board.clone())
        } else {
            debug!("Exhausted search after {} branch trials", self.branches);
            self.board = snapshot;
            Err(SudokuError::Unsolvable)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of trial assignments made by the search engine so far.
    pub fn branches(&self) -> u64 {
        self.branches
    }

    /// The fixed-point loop: propagate, apply deductions, and delegate to
    /// search once both single rules stall.
    fn run(&mut self) -> bool {
        loop {
            recompute_candidates(&mut self.board);
            if self.board.is_filled() {
                // A stale naked-single pass can fill a contradictory branch
                // completely; such a board is a dead end, not a solution.
                return validator::find_conflict(&self.board).is_none();
            }
            let progressed =
                apply_naked_singles(&mut self.board) || apply_hidden_singles(&mut self.board);
            if !progressed {
                return self.search();
            }
        }
    }

    /// Backtracking over the empty cell with the fewest candidates. Each
    /// trial runs on top of a full board snapshot so a failed branch rolls
    /// back without residue.
    fn search(&mut self) -> bool {
        let (row, col) = match select_branch_cell(&self.board) {
            Some(cell) => cell,
            None => return true,
        };
        let candidates = self.board.candidates(row, col).to_vec();
        debug!(
            "Branching on ({}, {}) with {} candidates",
            row,
            col,
            candidates.len()
        );

        for digit in candidates {
            trace!("Trying candidate {} at ({}, {})", digit, row, col);
            self.branches += 1;
            let snapshot = self.board.clone();
            self.board.set_value(row, col, digit);
            recompute_candidates(&mut self.board);
            if self.run() {
                return true;
            }
            self.board = snapshot;
        }

        self.board.clear_value(row, col);
        false
    }
}

/// Rebuilds every candidate set from the current values: an empty cell may
/// hold exactly the digits not yet used in its row, column, or box; a
/// filled cell holds none. Full recomputation each call, nothing is patched
/// incrementally.
pub(crate) fn recompute_candidates(board: &mut Board) {
    let size = board.size();
    let n = board.box_size();
    for row in 0..size {
        for col in 0..size {
            if board.value(row, col) != 0 {
                board.set_candidates(row, col, Vec::new());
                continue;
            }
            let mut used = vec![false; size + 1];
            for i in 0..size {
                used[board.value(row, i) as usize] = true;
                used[board.value(i, col) as usize] = true;
            }
            let (box_row, box_col) = board.box_origin(row, col);
            for i in 0..n {
                for j in 0..n {
                    used[board.value(box_row + i, box_col + j) as usize] = true;
                }
            }
            let candidates = (1..=size as u32).filter(|&d| !used[d as usize]).collect();
            board.set_candidates(row, col, candidates);
        }
    }
}

/// Fills every cell whose candidate set holds exactly one digit, scanning
/// in row-major order. Assignments within one pass are judged against the
/// candidate sets as they stood when the pass began; the orchestrator
/// recomputes before the next pass.
pub(crate) fn apply_naked_singles(board: &mut Board) -> bool {
    let size = board.size();
    let mut progressed = false;
    for row in 0..size {
        for col in 0..size {
            if board.value(row, col) == 0 && board.candidates(row, col).len() == 1 {
                let digit = board.candidates(row, col)[0];
                board.set_value(row, col, digit);
                progressed = true;
            }
        }
    }
    progressed
}

/// Finds digits that fit only one cell of a unit and assigns them, visiting
/// rows, then columns, then boxes in index order. After each assignment the
/// whole board is recomputed and the unit's tally rebuilt before any
/// further digit is checked.
pub(crate) fn apply_hidden_singles(board: &mut Board) -> bool {
    let size = board.size();
    let mut progressed = false;
    for row in 0..size {
        let coords = board.row_coords(row);
        progressed |= hidden_singles_in_unit(board, &coords);
    }
    for col in 0..size {
        let coords = board.col_coords(col);
        progressed |= hidden_singles_in_unit(board, &coords);
    }
    for index in 0..size {
        let coords = board.box_coords(index);
        progressed |= hidden_singles_in_unit(board, &coords);
    }
    progressed
}

fn hidden_singles_in_unit(board: &mut Board, coords: &[(usize, usize)]) -> bool {
    let size = board.size();
    let mut progressed = false;
    loop {
        let mut tally = vec![0u32; size + 1];
        for &(row, col) in coords {
            for &digit in board.candidates(row, col) {
                tally[digit as usize] += 1;
            }
        }

        let mut assigned = false;
        for digit in 1..=size as u32 {
            if tally[digit as usize] != 1 {
                continue;
            }
            let hit = coords
                .iter()
                .find(|&&(row, col)| board.candidates(row, col).contains(&digit));
            if let Some(&(row, col)) = hit {
                trace!("Hidden single {} at ({}, {})", digit, row, col);
                board.set_value(row, col, digit);
                recompute_candidates(board);
                progressed = true;
                assigned = true;
                break;
            }
        }
        if !assigned {
            return progressed;
        }
    }
}

/// Picks the empty cell with the fewest candidates, scanning row-major and
/// keeping the first cell that achieves the minimum. `None` means the board
/// is already filled.
pub(crate) fn select_branch_cell(board: &Board) -> Option<(usize, usize)> {
    let size = board.size();
    let mut best: Option<(usize, usize, usize)> = None;
    for row in 0..size {
        for col in 0..size {
            if board.value(row, col) != 0 {
                continue;
            }
            let count = board.candidates(row, col).len();
            if best.map_or(true, |(_, _, min)| count < min) {
                best = Some((row, col, count));
            }
        }
    }
    best.map(|(row, col, _)| (row, col))
}

fn count_empty(board: &Board) -> usize {
    let size = board.size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| board.value(row, col) == 0)
        .count()
}
