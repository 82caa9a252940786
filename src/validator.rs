//! Duplicate check over the committed values of a grid. Empty cells are
//! ignored, so the check applies equally to puzzles and finished boards.

use crate::board::Board;
use std::fmt;

/// First unit found holding a duplicate nonzero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    Row(usize),
    Column(usize),
    /// Box identified by its top-left cell.
    Box { row: usize, col: usize },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row(row) => write!(f, "duplicate value in row {}", row + 1),
            Conflict::Column(col) => write!(f, "duplicate value in column {}", col + 1),
            Conflict::Box { row, col } => {
                write!(f, "duplicate value in box at ({}, {})", row + 1, col + 1)
            }
        }
    }
}

/// Scans rows, then columns, then boxes and reports the first unit with a
/// repeated nonzero value.
pub fn find_conflict(board: &Board) -> Option<Conflict> {
    let size = board.size();
    let n = board.box_size();

    for row in 0..size {
        let mut seen = vec![false; size + 1];
        for col in 0..size {
            let value = board.value(row, col) as usize;
            if value != 0 {
                if seen[value] {
                    return Some(Conflict::Row(row));
                }
                seen[value] = true;
            }
        }
    }

    for col in 0..size {
        let mut seen = vec![false; size + 1];
        for row in 0..size {
            let value = board.value(row, col) as usize;
            if value != 0 {
                if seen[value] {
                    return Some(Conflict::Column(col));
                }
                seen[value] = true;
            }
        }
    }

    for box_row in (0..size).step_by(n) {
        for box_col in (0..size).step_by(n) {
            let mut seen = vec![false; size + 1];
            for i in 0..n {
                for j in 0..n {
                    let value = board.value(box_row + i, box_col + j) as usize;
                    if value != 0 {
                        if seen[value] {
                            return Some(Conflict::Box {
                                row: box_row,
                                col: box_col,
                            });
                        }
                        seen[value] = true;
                    }
                }
            }
        }
    }

    None
}

pub fn is_valid(board: &Board) -> bool {
    find_conflict(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: Vec<Vec<u32>>) -> Board {
        Board::new(2, values).unwrap()
    }

    #[test]
    fn test_complete_valid_grid() {
        let grid = board(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ]);
        assert_eq!(find_conflict(&grid), None);
        assert!(is_valid(&grid));
    }

    #[test]
    fn test_zeros_are_ignored() {
        let grid = board(vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(find_conflict(&grid), None);
    }

    #[test]
    fn test_row_duplicate() {
        let grid = board(vec![
            vec![1, 0, 1, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(find_conflict(&grid), Some(Conflict::Row(0)));
    }

    #[test]
    fn test_column_duplicate() {
        let grid = board(vec![
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(find_conflict(&grid), Some(Conflict::Column(1)));
    }

    #[test]
    fn test_box_duplicate() {
        // Same digit twice in the lower-right box, rows and columns clean
        let grid = board(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 3, 0],
            vec![0, 0, 0, 3],
        ]);
        assert_eq!(find_conflict(&grid), Some(Conflict::Box { row: 2, col: 2 }));
    }

    #[test]
    fn test_conflict_display() {
        assert_eq!(Conflict::Row(2).to_string(), "duplicate value in row 3");
        assert_eq!(
            Conflict::Box { row: 2, col: 2 }.to_string(),
            "duplicate value in box at (3, 3)"
        );
    }
}
