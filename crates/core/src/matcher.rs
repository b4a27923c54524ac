//! Match finder - connected same-color region detection.
//!
//! A region is a maximal set of same-colored, not-yet-matched tiles connected
//! through 4-directional adjacency (no diagonals). A full-grid pass scans in
//! row-major order, flood-fills from every unvisited seed, and marks every
//! region of at least [`MIN_REGION_SIZE`] tiles as matched.
//!
//! The visited set is shared across all seeds of one pass, so a seed that
//! lands inside an already-discovered region contributes nothing; regions are
//! never double-counted. Only cells that actually join a region are marked
//! visited - an off-color probe stays available as a seed of its own color.

use arrayvec::ArrayVec;

use slide_match_types::{CellPos, ColorId, MIN_REGION_SIZE};

use crate::grid::Grid;

/// Result of one full-grid detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPass {
    /// Size of every qualifying region, in discovery (row-major seed) order.
    pub regions: Vec<usize>,
    /// Every cell marked matched by this pass.
    pub cells: Vec<CellPos>,
}

impl MatchPass {
    /// Total number of tiles matched in the pass.
    pub fn total(&self) -> usize {
        self.cells.len()
    }

    /// True if the pass found no qualifying region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// In-bounds 4-neighbors of a cell, at most four of them.
fn neighbors(pos: CellPos, size: usize) -> ArrayVec<CellPos, 4> {
    let mut out = ArrayVec::new();
    if pos.row > 0 {
        out.push(CellPos::new(pos.row - 1, pos.col));
    }
    if pos.row + 1 < size {
        out.push(CellPos::new(pos.row + 1, pos.col));
    }
    if pos.col > 0 {
        out.push(CellPos::new(pos.row, pos.col - 1));
    }
    if pos.col + 1 < size {
        out.push(CellPos::new(pos.row, pos.col + 1));
    }
    out
}

/// True when `pos` can still join a region of `target_color` this pass.
fn accepts(grid: &Grid, target_color: ColorId, visited: &[bool], pos: CellPos) -> bool {
    !visited[pos.row * grid.size() + pos.col]
        && matches!(grid.tile(pos.row, pos.col),
                    Some(tile) if tile.color == target_color && !tile.matched)
}

/// Collect the connected region of `target_color` tiles containing
/// (row, col).
///
/// Returns an empty vec when the seed is out of bounds, vacant, a different
/// color, or already matched. `visited` is indexed row-major and must span
/// the grid; entries set here persist for the rest of the pass, which is what
/// prevents a later seed from rediscovering the same region.
pub fn connected_region(
    grid: &Grid,
    row: usize,
    col: usize,
    target_color: ColorId,
    visited: &mut [bool],
) -> Vec<CellPos> {
    let size = grid.size();
    let seed = CellPos::new(row, col);

    if !grid.in_bounds(row, col) || !accepts(grid, target_color, visited, seed) {
        return Vec::new();
    }

    // Explicit stack instead of recursion; a worst-case region is the whole
    // grid and recursion depth would scale with it.
    let mut region = Vec::new();
    let mut stack = vec![seed];
    visited[seed.row * size + seed.col] = true;

    while let Some(pos) = stack.pop() {
        region.push(pos);
        for next in neighbors(pos, size) {
            if accepts(grid, target_color, visited, next) {
                visited[next.row * size + next.col] = true;
                stack.push(next);
            }
        }
    }

    region
}

/// Run one full detection pass: scan row-major, flood-fill each seed, and
/// mark every region of `MIN_REGION_SIZE` or more tiles as matched.
pub fn find_and_mark(grid: &mut Grid) -> MatchPass {
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut pass = MatchPass::default();

    for row in 0..size {
        for col in 0..size {
            let Some(tile) = grid.tile(row, col) else {
                continue;
            };
            if tile.matched {
                continue;
            }

            let region = connected_region(grid, row, col, tile.color, &mut visited);
            if region.len() >= MIN_REGION_SIZE {
                for &pos in &region {
                    grid.set_matched(pos, true);
                }
                pass.regions.push(region.len());
                pass.cells.extend(region);
            }
        }
    }

    pass
}
