//! Driver runtime - owns a session on behalf of a presentation host.
//!
//! `SessionDriver` validates configuration, forwards input and clock ticks,
//! translates engine events into protocol messages, and sequences the
//! two-phase resolution loop. A rendering host calls `pump` once per
//! animation step (flash the flagged tiles, then pump again); headless hosts
//! (bots, tests) call `run_to_rest`.

use anyhow::{bail, Result};

use slide_match_core::session::GameSession;
use slide_match_types::{
    Mode, SelectionOutcome, SessionConfig, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_PALETTE_SIZE,
};

use crate::protocol::{EventMessage, ObservationMessage};

/// Reject configurations the engine could not run meaningfully.
fn validate_config(mode: Mode, config: &SessionConfig) -> Result<()> {
    if config.grid_size < MIN_GRID_SIZE || config.grid_size > MAX_GRID_SIZE {
        bail!(
            "grid size {} outside supported range {}..={}",
            config.grid_size,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE
        );
    }
    if config.palette_size < MIN_PALETTE_SIZE {
        bail!(
            "palette of {} colors cannot rest; need at least {}",
            config.palette_size,
            MIN_PALETTE_SIZE
        );
    }
    if config.palette_size > slide_match_types::COLOR_COUNT {
        bail!(
            "palette size {} exceeds the {}-color palette",
            config.palette_size,
            slide_match_types::COLOR_COUNT
        );
    }

    match mode {
        Mode::Endless => {}
        Mode::TimeAttack => {
            if config.time_limit_secs == Some(0) {
                bail!("time-attack session with a zero time budget");
            }
            if config.target_score == Some(0) {
                bail!("time-attack session with a zero target score");
            }
        }
        Mode::MoveChallenge => {
            if config.move_limit == Some(0) {
                bail!("move-challenge session with a zero move budget");
            }
            if config.target_score == Some(0) {
                bail!("move-challenge session with a zero target score");
            }
        }
    }

    Ok(())
}

/// A running session plus its outbound message queue.
pub struct SessionDriver {
    session: GameSession,
    outbox: Vec<EventMessage>,
    next_seq: u64,
}

impl SessionDriver {
    /// Validate the configuration, create the session, and start it. The
    /// opening resolution is left pending so the host can animate it; call
    /// [`SessionDriver::pump`] or [`SessionDriver::run_to_rest`] to drive it.
    pub fn new_session(mode: Mode, config: SessionConfig, seed: u32) -> Result<Self> {
        validate_config(mode, &config)?;

        let mut session = GameSession::new(mode, config, seed);
        session.start();

        let mut driver = Self {
            session,
            outbox: Vec::new(),
            next_seq: 0,
        };
        driver.collect_events();
        Ok(driver)
    }

    /// Wrap an existing session (prepared grids, replays). The session keeps
    /// whatever state it already has.
    pub fn from_session(session: GameSession) -> Self {
        Self {
            session,
            outbox: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Forward a cell selection and collect whatever events it produced.
    pub fn select_cell(&mut self, row: usize, col: usize) -> SelectionOutcome {
        let outcome = self.session.select_cell(row, col);
        self.collect_events();
        outcome
    }

    /// Forward a clock tick and collect whatever events it produced.
    pub fn tick(&mut self, elapsed_secs: u32) -> bool {
        let advanced = self.session.tick(elapsed_secs);
        self.collect_events();
        advanced
    }

    /// Advance the resolution loop by exactly one phase. Returns true while
    /// more pumping is needed. The host animates between calls: after a
    /// detect phase the flagged tiles sit in the outbox, after a clear phase
    /// the settled grid is observable.
    pub fn pump(&mut self) -> bool {
        // Whichever phase is due runs; the other call is a no-op.
        if self.session.clear_and_settle() {
            return true;
        }
        let matched = self.session.detect_and_mark();
        self.collect_events();
        matched
    }

    /// Drive the resolution loop until the grid rests.
    pub fn run_to_rest(&mut self) {
        while self.pump() {}
    }

    /// Snapshot the current state in wire form.
    pub fn observe(&mut self) -> ObservationMessage {
        let seq = self.next_seq;
        self.next_seq += 1;
        ObservationMessage::capture(&self.session, seq)
    }

    /// Drain the outbound event messages, oldest first.
    pub fn drain_outbox(&mut self) -> Vec<EventMessage> {
        std::mem::take(&mut self.outbox)
    }

    fn collect_events(&mut self) {
        for event in self.session.take_events() {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.outbox.push(EventMessage::from_event(&event, seq));
        }
    }
}
