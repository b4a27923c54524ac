//! Grid module - the square tile board.
//!
//! The grid is an N x N board where each cell holds a colored tile. Cells are
//! stored in a flat row-major `Vec` (index = row * size + col) with row 0 at
//! the top. Empty cells exist only transiently, between match removal and the
//! gravity/refill step; a grid at rest is always fully tiled.

use slide_match_types::{Cell, CellPos, ColorId, Tile};

use crate::rng::ColorWell;

/// The game grid. `Clone` is a deep copy, so snapshotting a time step for
/// undo or testing is a plain `grid.clone()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid (every cell vacant). Mainly useful for building
    /// fixtures cell-by-cell; sessions start from [`Grid::filled`].
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a grid with every cell holding a random tile from the well.
    /// Fill order is row-major. No adjacency constraint is applied: a fresh
    /// grid may already contain matches, which the first resolution pass
    /// clears for initial score.
    pub fn filled(size: usize, well: &mut ColorWell) -> Self {
        let mut grid = Self::empty(size);
        for cell in &mut grid.cells {
            *cell = Some(Tile::new(well.draw()));
        }
        grid
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get cell at (row, col). Outer `None` means out of bounds, inner `None`
    /// means the cell is (transiently) empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Tile at (row, col), flattening the bounds and vacancy checks.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).flatten()
    }

    /// Color at (row, col), if a tile is present.
    pub fn color(&self, row: usize, col: usize) -> Option<ColorId> {
        self.tile(row, col).map(|t| t.color)
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Set or clear the matched flag on a tile. No-op for vacant cells.
    pub fn set_matched(&mut self, pos: CellPos, matched: bool) {
        if let Some(idx) = self.index(pos.row, pos.col) {
            if let Some(tile) = self.cells[idx].as_mut() {
                tile.matched = matched;
            }
        }
    }

    /// Remove every matched tile, leaving vacant cells behind. Returns the
    /// number of tiles removed.
    pub fn remove_matched(&mut self) -> usize {
        let mut removed = 0;
        for cell in &mut self.cells {
            if matches!(cell, Some(tile) if tile.matched) {
                *cell = None;
                removed += 1;
            }
        }
        removed
    }

    /// Compact each column toward the bottom and refill the vacated cells at
    /// the top with fresh tiles from the well.
    ///
    /// Columns are independent. Within a column the surviving tiles keep
    /// their relative vertical order (write pointer walking bottom-up), then
    /// the refill runs top-down so the RNG stream is consumed in a fixed,
    /// reproducible order: columns left to right, vacancies top to bottom.
    pub fn apply_gravity(&mut self, well: &mut ColorWell) {
        for col in 0..self.size {
            let mut write_row = self.size;

            // Survivors drop to the lowest free rows.
            for read_row in (0..self.size).rev() {
                let read_idx = read_row * self.size + col;
                if let Some(tile) = self.cells[read_idx] {
                    write_row -= 1;
                    if write_row != read_row {
                        self.cells[write_row * self.size + col] = Some(tile);
                        self.cells[read_idx] = None;
                    }
                }
            }

            // Everything above the survivors is new.
            for row in 0..write_row {
                self.cells[row * self.size + col] = Some(Tile::new(well.draw()));
            }
        }
    }

    /// True if any cell is vacant. A grid exposed between player actions
    /// must never be.
    pub fn has_empty_cells(&self) -> bool {
        self.cells.iter().any(|c| c.is_none())
    }

    /// Create from rows of colors, for building test positions.
    #[cfg(test)]
    pub fn from_rows(rows: &[&[ColorId]]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.len() == size));

        let mut grid = Self::empty(size);
        for (row, colors) in rows.iter().enumerate() {
            for (col, &color) in colors.iter().enumerate() {
                grid.set(row, col, Some(Tile::new(color)));
            }
        }
        grid
    }

    /// Colors as rows, for assertions. Vacant cells become `None`.
    #[cfg(test)]
    pub fn to_color_rows(&self) -> Vec<Vec<Option<ColorId>>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.color(row, col)).collect())
            .collect()
    }
}
