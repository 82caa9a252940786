use crate::{Result, SudokuError};

/// A single grid cell: its committed value (0 = empty) and the candidate
/// digits still available to it. Candidates are kept sorted ascending and
/// are only ever rebuilt by the solver's propagation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub candidates: Vec<u32>,
}

/// An N×N Sudoku grid for box size `n` (N = n²), stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    box_size: usize,
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board from a value grid. Values must form an N×N matrix
    /// with every entry in `[0, N]`; candidates start empty until the
    /// first propagation pass fills them in.
    pub fn new(box_size: usize, values: Vec<Vec<u32>>) -> Result<Self> {
        if box_size == 0 {
            return Err(SudokuError::InvalidBoxSize(box_size.to_string()));
        }
        let size = box_size * box_size;
        if values.len() != size {
            return Err(SudokuError::DimensionMismatch);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, row_values) in values.into_iter().enumerate() {
            if row_values.len() != size {
                return Err(SudokuError::DimensionMismatch);
            }
            for (col, value) in row_values.into_iter().enumerate() {
                if value > size as u32 {
                    return Err(SudokuError::InvalidValue { row, col, value });
                }
                cells.push(Cell {
                    value,
                    candidates: Vec::new(),
                });
            }
        }
        Ok(Self {
            box_size,
            size,
            cells,
        })
    }

    /// An empty board of the given box size.
    pub fn empty(box_size: usize) -> Result<Self> {
        let size = box_size * box_size;
        Self::new(box_size, vec![vec![0; size]; size])
    }

    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Full grid side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)].value
    }

    pub fn candidates(&self, row: usize, col: usize) -> &[u32] {
        &self.cells[self.index(row, col)].candidates
    }

    /// Commits a value to a cell and drops its candidates.
    pub(crate) fn set_value(&mut self, row: usize, col: usize, value: u32) {
        let idx = self.index(row, col);
        self.cells[idx].value = value;
        self.cells[idx].candidates.clear();
    }

    pub(crate) fn clear_value(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx].value = 0;
    }

    pub(crate) fn set_candidates(&mut self, row: usize, col: usize, candidates: Vec<u32>) {
        let idx = self.index(row, col);
        self.cells[idx].candidates = candidates;
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.value != 0)
    }

    /// Top-left corner of the box containing (row, col).
    pub fn box_origin(&self, row: usize, col: usize) -> (usize, usize) {
        let n = self.box_size;
        (row / n * n, col / n * n)
    }

    pub(crate) fn row_coords(&self, row: usize) -> Vec<(usize, usize)> {
        (0..self.size).map(|col| (row, col)).collect()
    }

    pub(crate) fn col_coords(&self, col: usize) -> Vec<(usize, usize)> {
        (0..self.size).map(|row| (row, col)).collect()
    }

    /// Cells of the `index`-th box, boxes numbered row-major.
    pub(crate) fn box_coords(&self, index: usize) -> Vec<(usize, usize)> {
        let n = self.box_size;
        let origin_row = index / n * n;
        let origin_col = index % n * n;
        let mut coords = Vec::with_capacity(self.size);
        for i in 0..n {
            for j in 0..n {
                coords.push((origin_row + i, origin_col + j));
            }
        }
        coords
    }

    /// The value grid without candidate state, for rendering and tests.
    pub fn values(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.value(row, col)).collect())
            .collect()
    }
}
