//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the puzzle rules, state management, and
//! simulation logic. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical grids and cascades
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (browser host, terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile board with gravity compaction and random refill
//! - [`matcher`]: 4-directional flood fill and full-grid match passes
//! - [`slide`]: the player move - cyclic color rotation along a straight path
//! - [`scoring`]: per-pass points and combo bonuses
//! - [`goal`]: mode-based win/loss evaluation, win checked first
//! - [`session`]: complete session state and the two-phase resolution loop
//! - [`snapshot`]: read-only state views for presentation code
//! - [`rng`]: seeded LCG color generation
//!
//! # Game Rules
//!
//! - A slide picks two cells sharing a row or column and rotates the colors
//!   along the straight path between them by one step (far end wraps to the
//!   near end)
//! - Any connected region of three or more same-colored tiles clears;
//!   regions connect through edges only, never diagonals
//! - Cleared cells make the tiles above fall, fresh tiles drop in from the
//!   top, and the scan repeats until the grid rests (cascades)
//! - Every pass pays 10 points per tile plus 50 per combo level already
//!   chained; an empty pass resets the combo
//! - Sessions run endless, against a clock, or against a move budget
//!
//! # Example
//!
//! ```
//! use slide_match_core::GameSession;
//! use slide_match_types::{Mode, SessionConfig};
//!
//! // Create and start a session; the opening resolution clears any
//! // creation-time matches.
//! let mut session = GameSession::new(Mode::Endless, SessionConfig::default(), 12345);
//! session.start();
//! while session.detect_and_mark() {
//!     session.clear_and_settle();
//! }
//!
//! // Slide the top row one step to the right.
//! session.select_cell(0, 0);
//! session.select_cell(0, 7);
//! while session.detect_and_mark() {
//!     session.clear_and_settle();
//! }
//! assert!(!session.grid().has_empty_cells());
//! ```
//!
//! # Driving the resolution loop
//!
//! `detect_and_mark` and `clear_and_settle` are two halves of one cycle so a
//! presentation layer can animate the flagged tiles before they disappear
//! (`MATCH_FLASH_MS` in the types crate suggests a duration). Headless
//! callers just alternate the two until `detect_and_mark` returns false.

pub mod goal;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod slide;
pub mod snapshot;

pub use slide_match_types as types;

// Re-export commonly used types for convenience
pub use goal::{evaluate_goal, GoalVerdict};
pub use grid::Grid;
pub use matcher::{connected_region, find_and_mark, MatchPass};
pub use rng::{ColorWell, SimpleRng};
pub use scoring::{score_pass, PassScore};
pub use session::GameSession;
pub use slide::{rotate_along, slide_direction, SlideMove};
pub use snapshot::{SessionSnapshot, VACANT_CELL};
