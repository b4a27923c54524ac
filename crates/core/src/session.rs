//! Session module - the complete engine state for one game.
//!
//! `GameSession` ties the grid, match finder, slide transform, scoring, and
//! goal evaluation together behind the API a presentation layer drives:
//! `select_cell` for player input, `tick` for external clocks, and the
//! two-phase resolution loop `detect_and_mark` / `clear_and_settle`.
//!
//! The split resolution loop is deliberate. After a slide the engine marks
//! matched tiles and reports them (so the caller can flash them), and only a
//! later `clear_and_settle` call removes the tiles and drops replacements in.
//! The caller owns the pacing between the two; the engine never sleeps.
//! While either phase is pending, player input is rejected, which keeps the
//! "no vacant cells between player actions" invariant observable.
//!
//! One `&mut self` actor processes actions and ticks strictly sequentially;
//! there is exactly one mutable grid per session and it is never aliased.

use slide_match_types::{
    CellPos, Mode, SelectionOutcome, SessionConfig, SessionEvent, DEFAULT_MOVE_LIMIT,
    DEFAULT_TARGET_SCORE, DEFAULT_TIME_LIMIT_SECS,
};

use crate::goal::{evaluate_goal, GoalVerdict};
use crate::grid::Grid;
use crate::matcher::find_and_mark;
use crate::rng::ColorWell;
use crate::scoring::score_pass;
use crate::slide::{rotate_along, SlideMove};
use crate::snapshot::{SessionSnapshot, VACANT_CELL};

/// Where the resolution loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvePhase {
    /// Grid at rest; input accepted.
    Idle,
    /// A detection pass is due.
    Detect,
    /// Matched tiles are flagged and announced, awaiting removal.
    Clear,
}

/// Complete state for one puzzle session.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    well: ColorWell,
    mode: Mode,
    selection: Option<CellPos>,
    phase: ResolvePhase,
    combo: u32,
    score: u32,
    moves_used: u32,
    moves_remaining: Option<u32>,
    time_remaining: Option<u32>,
    target_score: Option<u32>,
    started: bool,
    is_over: bool,
    is_won: bool,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create a session with a randomly filled grid.
    pub fn new(mode: Mode, config: SessionConfig, seed: u32) -> Self {
        let mut well = ColorWell::new(seed, config.palette_size);
        let grid = Grid::filled(config.grid_size, &mut well);
        Self::assemble(mode, config, well, grid)
    }

    /// Create a session over a prepared grid (puzzle setups, replays,
    /// deterministic tests). The grid is expected fully tiled; any vacancies
    /// are settled on `start`.
    pub fn from_grid(mode: Mode, config: SessionConfig, seed: u32, grid: Grid) -> Self {
        let well = ColorWell::new(seed, config.palette_size);
        Self::assemble(mode, config, well, grid)
    }

    fn assemble(mode: Mode, config: SessionConfig, well: ColorWell, grid: Grid) -> Self {
        let (time_remaining, moves_remaining, target_score) = match mode {
            Mode::Endless => (None, None, None),
            Mode::TimeAttack => (
                Some(config.time_limit_secs.unwrap_or(DEFAULT_TIME_LIMIT_SECS)),
                None,
                Some(config.target_score.unwrap_or(DEFAULT_TARGET_SCORE)),
            ),
            Mode::MoveChallenge => (
                None,
                Some(config.move_limit.unwrap_or(DEFAULT_MOVE_LIMIT)),
                Some(config.target_score.unwrap_or(DEFAULT_TARGET_SCORE)),
            ),
        };

        Self {
            grid,
            well,
            mode,
            selection: None,
            phase: ResolvePhase::Idle,
            combo: 0,
            score: 0,
            moves_used: 0,
            moves_remaining,
            time_remaining,
            target_score,
            started: false,
            is_over: false,
            is_won: false,
            events: Vec::new(),
        }
    }

    /// Mark the session live and queue the opening resolution. The fresh
    /// grid is not pre-scanned: creation-time matches go through the normal
    /// detect/clear cycle and contribute to the initial score.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if self.grid.has_empty_cells() {
            self.grid.apply_gravity(&mut self.well);
        }
        self.phase = ResolvePhase::Detect;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn moves_remaining(&self) -> Option<u32> {
        self.moves_remaining
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn target_score(&self) -> Option<u32> {
        self.target_score
    }

    pub fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    fn ended(&self) -> bool {
        self.is_over || self.is_won
    }

    /// True while a detect/clear cycle is pending and input is rejected.
    pub fn resolving(&self) -> bool {
        self.phase != ResolvePhase::Idle
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current RNG state, enough to replay the session tail.
    pub fn seed(&self) -> u32 {
        self.well.seed()
    }

    /// Drain the queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record, clear, or act on a cell selection.
    ///
    /// The first pick of a pair is recorded; re-picking the same cell clears
    /// the selection without consuming a move; a second, aligned pick runs
    /// the slide and queues resolution. Everything else is a rejection
    /// outcome, never an error.
    pub fn select_cell(&mut self, row: usize, col: usize) -> SelectionOutcome {
        if !self.started {
            return SelectionOutcome::NotStarted;
        }
        if self.ended() {
            return SelectionOutcome::Finished;
        }
        if self.resolving() {
            return SelectionOutcome::Busy;
        }
        if !self.grid.in_bounds(row, col) {
            return SelectionOutcome::OutOfBounds;
        }

        let pos = CellPos::new(row, col);
        match self.selection {
            None => {
                self.selection = Some(pos);
                SelectionOutcome::Selected
            }
            Some(first) if first == pos => {
                self.selection = None;
                SelectionOutcome::Deselected
            }
            Some(first) => match SlideMove::between(first, pos) {
                // Off-axis pair: keep the pending selection so the player
                // can pick a valid partner.
                None => SelectionOutcome::Misaligned,
                Some(mv) => {
                    rotate_along(&mut self.grid, &mv.path);
                    self.selection = None;
                    self.moves_used += 1;
                    if let Some(moves) = self.moves_remaining.as_mut() {
                        *moves = moves.saturating_sub(1);
                    }
                    self.phase = ResolvePhase::Detect;
                    SelectionOutcome::MoveExecuted(mv.direction)
                }
            },
        }
    }

    /// Run one detection pass over the grid.
    ///
    /// On a hit: matched cells are flagged, `TilesMatched` and `ScoreAwarded`
    /// events are queued (the bonus uses the combo count from before this
    /// pass), the combo increments, and the session moves to the clear
    /// phase - returns true. On an empty pass the combo resets, the grid is
    /// at rest, the full goal verdict (including loss) is evaluated, and
    /// input opens up again - returns false. Out of phase: no-op, false.
    pub fn detect_and_mark(&mut self) -> bool {
        if self.phase != ResolvePhase::Detect {
            return false;
        }

        let pass = find_and_mark(&mut self.grid);
        if pass.is_empty() {
            self.combo = 0;
            self.phase = ResolvePhase::Idle;
            self.evaluate_at_rest();
            return false;
        }

        let combo_before = self.combo;
        self.combo += 1;
        let award = score_pass(pass.total(), combo_before);
        self.score = self.score.saturating_add(award.total);

        self.events.push(SessionEvent::TilesMatched {
            cells: pass.cells,
            region_sizes: pass.regions,
        });
        self.events.push(SessionEvent::ScoreAwarded {
            points: award.total,
            combo_level: combo_before,
        });

        self.check_win();
        self.phase = ResolvePhase::Clear;
        true
    }

    /// Remove the flagged tiles and settle the grid: gravity compacts each
    /// column, fresh tiles refill the top. Leaves the session due for the
    /// next detection pass. Out of phase: no-op, false.
    pub fn clear_and_settle(&mut self) -> bool {
        if self.phase != ResolvePhase::Clear {
            return false;
        }

        self.grid.remove_matched();
        self.grid.apply_gravity(&mut self.well);
        self.phase = ResolvePhase::Detect;
        true
    }

    /// Advance the external clock. Only time-attack sessions track time; the
    /// call is a no-op before `start`, after the session ends, and for
    /// untimed modes. Returns true if the clock advanced.
    pub fn tick(&mut self, elapsed_secs: u32) -> bool {
        if !self.started || self.ended() || elapsed_secs == 0 {
            return false;
        }
        let Some(remaining) = self.time_remaining else {
            return false;
        };

        self.time_remaining = Some(remaining.saturating_sub(elapsed_secs));
        self.apply_verdict(evaluate_goal(
            self.mode,
            self.score,
            self.target_score,
            self.time_remaining,
            self.moves_remaining,
        ));
        true
    }

    /// Latch the win as soon as the score crosses the target, even
    /// mid-cascade. Losses wait for quiescence or a tick.
    fn check_win(&mut self) {
        if self.ended() {
            return;
        }
        let verdict = evaluate_goal(
            self.mode,
            self.score,
            self.target_score,
            // Budgets are irrelevant to the win side of the evaluation.
            self.time_remaining,
            self.moves_remaining,
        );
        if verdict == GoalVerdict::Won {
            self.is_won = true;
            self.events.push(SessionEvent::SessionEnded { won: true });
        }
    }

    /// Full goal evaluation once the grid is at rest.
    fn evaluate_at_rest(&mut self) {
        if self.ended() {
            return;
        }
        self.apply_verdict(evaluate_goal(
            self.mode,
            self.score,
            self.target_score,
            self.time_remaining,
            self.moves_remaining,
        ));
    }

    fn apply_verdict(&mut self, verdict: GoalVerdict) {
        match verdict {
            GoalVerdict::Continue => {}
            GoalVerdict::Won => {
                self.is_won = true;
                self.events.push(SessionEvent::SessionEnded { won: true });
            }
            GoalVerdict::Lost => {
                self.is_over = true;
                self.events.push(SessionEvent::SessionEnded { won: false });
            }
        }
    }

    /// Fill an existing snapshot, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.size = self.grid.size();
        out.colors.clear();
        out.matched.clear();
        for cell in self.grid.cells() {
            match cell {
                Some(tile) => {
                    out.colors.push(tile.color.index());
                    out.matched.push(tile.matched);
                }
                None => {
                    out.colors.push(VACANT_CELL);
                    out.matched.push(false);
                }
            }
        }

        out.mode = self.mode;
        out.selection = self.selection;
        out.score = self.score;
        out.combo = self.combo;
        out.moves_used = self.moves_used;
        out.moves_remaining = self.moves_remaining;
        out.time_remaining = self.time_remaining;
        out.target_score = self.target_score;
        out.seed = self.well.seed();
        out.started = self.started;
        out.resolving = self.resolving();
        out.is_over = self.is_over;
        out.is_won = self.is_won;
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::Endless, SessionConfig::default(), 1)
    }
}
