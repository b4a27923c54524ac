//! Adapter module - the presentation-facing boundary of the engine.
//!
//! The core crate is pure state; this crate packages it the way a
//! presentation collaborator (a rendering host, a bot, a test harness)
//! consumes it:
//!
//! - **Typed JSON messages**: a full-state observation plus one message per
//!   engine event (`tiles_matched`, `score_awarded`, `session_ended`), each
//!   carrying a `type` tag and a per-session monotonic `seq`. See
//!   [`protocol`].
//! - **A session driver**: validates configuration, forwards input and clock
//!   ticks, queues outbound messages, and sequences the two-phase resolution
//!   loop. See [`runtime`].
//!
//! # Message Flow
//!
//! ```text
//! Host -> Driver: new_session(mode, config, seed)
//! Host -> Driver: select_cell(3, 0) ... select_cell(3, 5)
//! Driver -> Host: {"type":"tiles_matched","seq":2,"cell_ids":["3-4","3-5","4-5"],...}
//! Driver -> Host: {"type":"score_awarded","seq":3,"points":30,"combo_level":0}
//! Host: flash the matched tiles, then pump() to settle and re-check
//! ```
//!
//! Cell ids on the wire are positional `"row-col"` display keys; they are
//! recomputed from coordinates every time and carry no identity.
//!
//! The engine never owns a clock or a socket: pacing comes from the host
//! calling `pump`/`tick`, and transport (if any) is the host's business.

pub mod protocol;
pub mod runtime;

pub use slide_match_core as core;
pub use slide_match_types as types;

// Re-export the common surface for convenience
pub use protocol::{
    EventMessage, ObservationMessage, ScoreAwardedMessage, SessionEndedMessage,
    TilesMatchedMessage,
};
pub use runtime::SessionDriver;
