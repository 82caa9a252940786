use crate::board::Board;
use crate::Result;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Produces puzzles for an arbitrary box size by shuffling a canonical
/// solved grid and then blanking cells in centrally symmetric pairs.
///
/// Every transformation (row/column swaps inside a band or stack, whole
/// band/stack swaps, digit relabeling) maps a valid grid to a valid grid,
/// so the remaining clues are always conflict-free. Solution uniqueness is
/// not guaranteed.
pub struct Generator {
    rng: SmallRng,
    box_size: usize,
}

impl Generator {
    pub fn new(box_size: usize) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            box_size,
        }
    }

    /// Seeded variant for reproducible output.
    pub fn with_seed(box_size: usize, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            box_size,
        }
    }

    /// Generates a puzzle with roughly 75% of the cells given as clues.
    pub fn generate(&mut self) -> Result<Board> {
        let size = self.box_size * self.box_size;
        let mut grid = self.base_grid();
        self.shuffle_grid(&mut grid);
        let clues = size * size * 3 / 4;
        self.remove_numbers(&mut grid, size * size - clues);
        Board::new(self.box_size, grid)
    }

    /// The canonical solved grid: row i is the base sequence rotated by
    /// `i·n + i/n`, which satisfies all three unit constraints.
    fn base_grid(&self) -> Vec<Vec<u32>> {
        let n = self.box_size;
        let size = n * n;
        (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| (((i * n + i / n + j) % size) + 1) as u32)
                    .collect()
            })
            .collect()
    }

    fn shuffle_grid(&mut self, grid: &mut Vec<Vec<u32>>) {
        let n = self.box_size;
        let size = n * n;

        // Rows within each band
        for band in 0..n {
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut self.rng);
            let rows: Vec<Vec<u32>> = (0..n).map(|i| grid[band * n + order[i]].clone()).collect();
            for (i, row) in rows.into_iter().enumerate() {
                grid[band * n + i] = row;
            }
        }

        // Columns within each stack
        for stack in 0..n {
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut self.rng);
            for row in grid.iter_mut() {
                let cols: Vec<u32> = (0..n).map(|j| row[stack * n + order[j]]).collect();
                for (j, value) in cols.into_iter().enumerate() {
                    row[stack * n + j] = value;
                }
            }
        }

        // Whole bands
        let mut band_order: Vec<usize> = (0..n).collect();
        band_order.shuffle(&mut self.rng);
        let snapshot = grid.clone();
        for (i, &band) in band_order.iter().enumerate() {
            for j in 0..n {
                grid[i * n + j] = snapshot[band * n + j].clone();
            }
        }

        // Whole stacks
        let mut stack_order: Vec<usize> = (0..n).collect();
        stack_order.shuffle(&mut self.rng);
        let snapshot = grid.clone();
        for row in 0..size {
            for (j, &stack) in stack_order.iter().enumerate() {
                for k in 0..n {
                    grid[row][j * n + k] = snapshot[row][stack * n + k];
                }
            }
        }

        // Relabel digits by a random permutation
        let mut relabeled: Vec<u32> = (1..=size as u32).collect();
        relabeled.shuffle(&mut self.rng);
        for row in grid.iter_mut() {
            for value in row.iter_mut() {
                *value = relabeled[(*value - 1) as usize];
            }
        }
    }

    /// Blanks `count` cells, always clearing a cell together with its
    /// centrally symmetric partner.
    fn remove_numbers(&mut self, grid: &mut [Vec<u32>], count: usize) {
        let size = grid.len();
        let mut remaining = count;
        while remaining > 0 {
            let i = self.rng.gen_range(0..size);
            let j = self.rng.gen_range(0..size);
            if grid[i][j] == 0 {
                continue;
            }
            grid[i][j] = 0;
            remaining -= 1;
            let (mi, mj) = (size - 1 - i, size - 1 - j);
            if remaining > 0 && grid[mi][mj] != 0 {
                grid[mi][mj] = 0;
                remaining -= 1;
            }
        }
    }
}
