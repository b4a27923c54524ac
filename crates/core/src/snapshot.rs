//! Read-only session snapshots for the presentation collaborator.
//!
//! Presentation code never holds the live grid; it works from snapshots
//! produced by `GameSession::snapshot`/`snapshot_into`. The `_into` variant
//! reuses the snapshot's buffers so a render loop can refresh its view
//! without reallocating.

use slide_match_types::{CellPos, Mode};

/// Color-index sentinel for a vacant cell. Grids at rest are always fully
/// tiled, so this only ever appears in snapshots taken mid-phase.
pub const VACANT_CELL: u8 = u8::MAX;

/// Externally observable state of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Grid side length.
    pub size: usize,
    /// Row-major palette indices; `VACANT_CELL` for empty cells.
    pub colors: Vec<u8>,
    /// Row-major matched flags, parallel to `colors`.
    pub matched: Vec<bool>,
    pub mode: Mode,
    pub selection: Option<CellPos>,
    pub score: u32,
    pub combo: u32,
    pub moves_used: u32,
    pub moves_remaining: Option<u32>,
    pub time_remaining: Option<u32>,
    pub target_score: Option<u32>,
    /// RNG state at snapshot time; replaying from here reproduces the tail.
    pub seed: u32,
    pub started: bool,
    pub resolving: bool,
    pub is_over: bool,
    pub is_won: bool,
}

impl SessionSnapshot {
    /// True while the session accepts player input.
    pub fn playable(&self) -> bool {
        self.started && !self.resolving && !self.is_over && !self.is_won
    }

    /// Color index at (row, col), if tiled and in bounds.
    pub fn color_index_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        match self.colors[row * self.size + col] {
            VACANT_CELL => None,
            index => Some(index),
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            colors: Vec::new(),
            matched: Vec::new(),
            mode: Mode::Endless,
            selection: None,
            score: 0,
            combo: 0,
            moves_used: 0,
            moves_remaining: None,
            time_remaining: None,
            target_score: None,
            seed: 0,
            started: false,
            resolving: false,
            is_over: false,
            is_won: false,
        }
    }
}
