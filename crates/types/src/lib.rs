//! Shared data structures and constants for the slide-match engine.
//!
//! Everything in this crate is pure data with no external dependencies, so it
//! can be used from any context (core logic, presentation adapters, tests).
//!
//! # Grid Dimensions
//!
//! The reference board is an 8x8 grid of tiles drawn from an 8-color palette.
//! Both are configurable per session via [`SessionConfig`]; coordinates are
//! `(row, col)` with row 0 at the top.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_POINTS` | 10 | Points per matched tile in a pass |
//! | `COMBO_BONUS_STEP` | 50 | Bonus per combo level already banked |
//! | `MIN_REGION_SIZE` | 3 | Smallest connected region that clears |
//! | `MATCH_FLASH_MS` | 600 | Suggested flash duration before removal |
//!
//! `MATCH_FLASH_MS` is a pacing hint for the presentation layer: the engine
//! exposes match detection and tile removal as two separate phases and never
//! sleeps between them itself.

/// Reference grid side length.
pub const DEFAULT_GRID_SIZE: usize = 8;
/// Smallest playable grid side length accepted by the adapter.
pub const MIN_GRID_SIZE: usize = 3;
/// Largest grid side length accepted by the adapter.
pub const MAX_GRID_SIZE: usize = 16;

/// Number of colors in the full palette.
pub const COLOR_COUNT: u8 = 8;
/// Reference palette size (all colors in play).
pub const DEFAULT_PALETTE_SIZE: u8 = 8;
/// Smallest palette accepted by the adapter; a single color would make the
/// whole grid one permanent region and the resolution loop could not rest.
pub const MIN_PALETTE_SIZE: u8 = 2;

/// Points awarded per matched tile in one resolution pass.
pub const TILE_POINTS: u32 = 10;
/// Bonus points per combo level held before the current pass.
pub const COMBO_BONUS_STEP: u32 = 50;
/// Minimum connected-region size that qualifies as a match.
pub const MIN_REGION_SIZE: usize = 3;

/// Suggested duration for the matched-tile flash, in milliseconds.
/// Presentation pacing only; the engine never sleeps.
pub const MATCH_FLASH_MS: u32 = 600;

/// Fallback time budget for time-attack sessions (seconds).
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 120;
/// Fallback move budget for move-challenge sessions.
pub const DEFAULT_MOVE_LIMIT: u32 = 30;
/// Fallback target score for limited modes.
pub const DEFAULT_TARGET_SCORE: u32 = 1000;

/// Tile colors. Identifiers are opaque to the engine; the names follow the
/// reference palette order and exist only for display and wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Pink,
    Cyan,
    Lime,
}

impl ColorId {
    /// All palette entries in index order.
    pub const ALL: [ColorId; COLOR_COUNT as usize] = [
        ColorId::Blue,
        ColorId::Red,
        ColorId::Green,
        ColorId::Orange,
        ColorId::Purple,
        ColorId::Pink,
        ColorId::Cyan,
        ColorId::Lime,
    ];

    /// Palette index of this color.
    pub fn index(&self) -> u8 {
        match self {
            ColorId::Blue => 0,
            ColorId::Red => 1,
            ColorId::Green => 2,
            ColorId::Orange => 3,
            ColorId::Purple => 4,
            ColorId::Pink => 5,
            ColorId::Cyan => 6,
            ColorId::Lime => 7,
        }
    }

    /// Color for a palette index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Lowercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Blue => "blue",
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Orange => "orange",
            ColorId::Purple => "purple",
            ColorId::Pink => "pink",
            ColorId::Cyan => "cyan",
            ColorId::Lime => "lime",
        }
    }
}

/// A single tile on the grid. Only the color and the matched flag carry
/// meaning; the original display key (`"row-col"`) is derived from position
/// at the adapter boundary, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub color: ColorId,
    pub matched: bool,
}

impl Tile {
    /// A fresh, unmatched tile of the given color.
    pub fn new(color: ColorId) -> Self {
        Self {
            color,
            matched: false,
        }
    }
}

/// Grid cell: `None` only transiently, between match removal and refill.
pub type Cell = Option<Tile>;

/// Grid coordinate, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Positional display key in the `"row-col"` form used by wire formats.
    pub fn display_id(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }
}

/// Direction a slide travels, from the first selected cell toward the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SlideDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideDirection::Up => "up",
            SlideDirection::Down => "down",
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, SlideDirection::Left | SlideDirection::Right)
    }
}

/// Session modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No limits, no target; the session never ends.
    Endless,
    /// Fixed time budget, win by reaching the target score first.
    TimeAttack,
    /// Fixed move budget, win by reaching the target score first.
    MoveChallenge,
}

impl Mode {
    /// Parse a mode from its wire name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "endless" => Some(Mode::Endless),
            "timeattack" => Some(Mode::TimeAttack),
            "movechallenge" => Some(Mode::MoveChallenge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Endless => "endless",
            Mode::TimeAttack => "timeattack",
            Mode::MoveChallenge => "movechallenge",
        }
    }
}

/// Per-session configuration. Fields left `None` fall back to the mode's
/// default budget inside the core; the adapter rejects configurations that
/// make no sense for the requested mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: usize,
    pub palette_size: u8,
    pub time_limit_secs: Option<u32>,
    pub move_limit: Option<u32>,
    pub target_score: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            palette_size: DEFAULT_PALETTE_SIZE,
            time_limit_secs: None,
            move_limit: None,
            target_score: None,
        }
    }
}

/// Result of a `select_cell` call. Rejections are ordinary outcomes, not
/// errors: the caller simply ignores them or surfaces them as UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First cell of a pair recorded.
    Selected,
    /// The sole selected cell was re-picked; selection cleared, no move spent.
    Deselected,
    /// A slide ran; resolution is now pending.
    MoveExecuted(SlideDirection),
    /// Coordinate outside the grid.
    OutOfBounds,
    /// Second cell shares neither row nor column with the first; the first
    /// selection stays pending.
    Misaligned,
    /// A resolution cycle is in progress; input is rejected until it rests.
    Busy,
    /// Session already won or over.
    Finished,
    /// `start` has not been called yet.
    NotStarted,
}

impl SelectionOutcome {
    /// True for every variant that did not change the selection or the grid.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SelectionOutcome::OutOfBounds
                | SelectionOutcome::Misaligned
                | SelectionOutcome::Busy
                | SelectionOutcome::Finished
                | SelectionOutcome::NotStarted
        )
    }
}

/// Events emitted by the engine for the presentation collaborator. Drained
/// via `GameSession::take_events`; order within one action is meaningful
/// (matches are announced before their score, endings come last).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// One resolution pass marked these cells; `region_sizes` lists the size
    /// of every qualifying region found in the pass.
    TilesMatched {
        cells: Vec<CellPos>,
        region_sizes: Vec<usize>,
    },
    /// Points banked for one pass. `combo_level` is the combo count the bonus
    /// was computed from (the count before this pass incremented it).
    ScoreAwarded { points: u32, combo_level: u32 },
    /// The session reached its goal or exhausted its budget.
    SessionEnded { won: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for color in ColorId::ALL {
            assert_eq!(ColorId::from_index(color.index()), Some(color));
        }
        assert_eq!(ColorId::from_index(COLOR_COUNT), None);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("endless"), Some(Mode::Endless));
        assert_eq!(Mode::from_str("TimeAttack"), Some(Mode::TimeAttack));
        assert_eq!(Mode::from_str("MOVECHALLENGE"), Some(Mode::MoveChallenge));
        assert_eq!(Mode::from_str("zen"), None);
    }

    #[test]
    fn test_display_id_format() {
        assert_eq!(CellPos::new(3, 7).display_id(), "3-7");
        assert_eq!(CellPos::new(0, 0).display_id(), "0-0");
    }

    #[test]
    fn test_selection_outcome_rejections() {
        assert!(!SelectionOutcome::Selected.is_rejection());
        assert!(!SelectionOutcome::MoveExecuted(SlideDirection::Left).is_rejection());
        assert!(SelectionOutcome::Busy.is_rejection());
        assert!(SelectionOutcome::Misaligned.is_rejection());
    }
}
