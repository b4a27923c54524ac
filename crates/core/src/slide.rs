//! Slide transform - the player move.
//!
//! A slide picks two cells on a shared row or column and cyclically rotates
//! the colors along the straight inclusive path between them by one step:
//! the color at the far end wraps around to the near end, everything else
//! shifts one cell toward the far end. Tiles never move; only their colors
//! are permuted along the path.

use slide_match_types::{CellPos, SlideDirection, Tile};

use crate::grid::Grid;

/// Dominant-axis direction from `from` toward `to`. A larger row delta makes
/// the slide vertical; ties, including exact diagonals, resolve to
/// horizontal.
pub fn slide_direction(from: CellPos, to: CellPos) -> SlideDirection {
    let row_delta = to.row as isize - from.row as isize;
    let col_delta = to.col as isize - from.col as isize;

    if row_delta.abs() > col_delta.abs() {
        if row_delta > 0 {
            SlideDirection::Down
        } else {
            SlideDirection::Up
        }
    } else if col_delta >= 0 {
        SlideDirection::Right
    } else {
        SlideDirection::Left
    }
}

/// A validated slide between two aligned cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideMove {
    pub from: CellPos,
    pub to: CellPos,
    pub direction: SlideDirection,
    /// Inclusive path from `from` to `to`, in travel order.
    pub path: Vec<CellPos>,
}

impl SlideMove {
    /// Build the move connecting two distinct cells.
    ///
    /// Returns `None` when the cells share neither a row nor a column: only
    /// straight paths are rotatable, so off-axis pairs are rejected rather
    /// than guessed at. Identical cells are the caller's deselection case and
    /// also return `None`.
    pub fn between(from: CellPos, to: CellPos) -> Option<Self> {
        if from == to || (from.row != to.row && from.col != to.col) {
            return None;
        }

        let direction = slide_direction(from, to);
        let path = if from.row == to.row {
            let cols: Vec<usize> = if from.col < to.col {
                (from.col..=to.col).collect()
            } else {
                (to.col..=from.col).rev().collect()
            };
            cols.into_iter().map(|c| CellPos::new(from.row, c)).collect()
        } else {
            let rows: Vec<usize> = if from.row < to.row {
                (from.row..=to.row).collect()
            } else {
                (to.row..=from.row).rev().collect()
            };
            rows.into_iter().map(|r| CellPos::new(r, from.col)).collect()
        };

        Some(Self {
            from,
            to,
            direction,
            path,
        })
    }
}

/// Rotate the colors along a path one step: the last color moves to the
/// front, the rest shift toward the end. Matched flags on the path reset;
/// this runs between resolution passes, so nothing on the path can stay
/// marked. Single-cell paths change nothing but still reset the flag.
pub fn rotate_along(grid: &mut Grid, path: &[CellPos]) {
    let mut colors: Vec<_> = path
        .iter()
        .filter_map(|pos| grid.color(pos.row, pos.col))
        .collect();

    if let Some(last) = colors.pop() {
        colors.insert(0, last);
    }

    let mut next = colors.into_iter();
    for &pos in path {
        if grid.tile(pos.row, pos.col).is_some() {
            if let Some(color) = next.next() {
                grid.set(pos.row, pos.col, Some(Tile::new(color)));
            }
        }
    }
}
