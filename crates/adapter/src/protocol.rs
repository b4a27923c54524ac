//! Protocol module - JSON message types for the presentation boundary.
//!
//! The engine talks to its presentation collaborator through typed messages:
//! a full-state observation plus one message per engine event. Messages
//! carry a `type` tag and a per-session monotonic `seq`; there is no
//! timestamp because the engine owns no clock. All payloads are line-JSON
//! friendly so a host can forward them over any in-process or IPC channel.

use serde::{Deserialize, Serialize};

use slide_match_core::session::GameSession;
use slide_match_core::snapshot::VACANT_CELL;
use slide_match_types::{CellPos, SessionEvent};

// ============== Message type tags ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TilesMatchedType {
    #[serde(rename = "tiles_matched")]
    TilesMatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreAwardedType {
    #[serde(rename = "score_awarded")]
    ScoreAwarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEndedType {
    #[serde(rename = "session_ended")]
    SessionEnded,
}

// ============== Engine -> Presentation Messages ==============

/// Full session state in wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub mode: String,
    pub grid_size: u8,
    /// Rows of palette indices, top row first. Vacant cells (only possible
    /// mid-phase) are `null`.
    pub board: Vec<Vec<Option<u8>>>,
    /// Rows of matched flags, parallel to `board`.
    pub matched: Vec<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    pub score: u32,
    pub combo: u32,
    pub moves_used: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_score: Option<u32>,
    pub seed: u32,
    pub resolving: bool,
    pub is_over: bool,
    pub is_won: bool,
}

impl ObservationMessage {
    /// Capture the current state of a session.
    pub fn capture(session: &GameSession, seq: u64) -> Self {
        let snap = session.snapshot();
        let size = snap.size;

        let row_of = |row: usize| -> Vec<Option<u8>> {
            snap.colors[row * size..(row + 1) * size]
                .iter()
                .map(|&index| if index == VACANT_CELL { None } else { Some(index) })
                .collect()
        };
        let board: Vec<Vec<Option<u8>>> = (0..size).map(row_of).collect();
        let matched: Vec<Vec<bool>> = (0..size)
            .map(|row| snap.matched[row * size..(row + 1) * size].to_vec())
            .collect();

        Self {
            msg_type: ObservationType::Observation,
            seq,
            mode: snap.mode.as_str().to_string(),
            grid_size: size as u8,
            board,
            matched,
            selection: snap.selection.map(|pos| pos.display_id()),
            score: snap.score,
            combo: snap.combo,
            moves_used: snap.moves_used,
            moves_remaining: snap.moves_remaining,
            time_remaining: snap.time_remaining,
            target_score: snap.target_score,
            seed: snap.seed,
            resolving: snap.resolving,
            is_over: snap.is_over,
            is_won: snap.is_won,
        }
    }
}

/// One resolution pass flagged these cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilesMatchedMessage {
    #[serde(rename = "type")]
    pub msg_type: TilesMatchedType,
    pub seq: u64,
    /// Positional `"row-col"` display keys for the flagged cells.
    pub cell_ids: Vec<String>,
    pub region_sizes: Vec<u32>,
}

/// Points banked for one resolution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAwardedMessage {
    #[serde(rename = "type")]
    pub msg_type: ScoreAwardedType,
    pub seq: u64,
    pub points: u32,
    /// Combo level the bonus was computed from.
    pub combo_level: u32,
}

/// The session reached its goal or exhausted its budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedMessage {
    #[serde(rename = "type")]
    pub msg_type: SessionEndedType,
    pub seq: u64,
    pub won: bool,
}

/// Any engine event in wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventMessage {
    TilesMatched(TilesMatchedMessage),
    ScoreAwarded(ScoreAwardedMessage),
    SessionEnded(SessionEndedMessage),
}

impl EventMessage {
    /// Wrap a core event, stamping the given sequence number.
    pub fn from_event(event: &SessionEvent, seq: u64) -> Self {
        match event {
            SessionEvent::TilesMatched {
                cells,
                region_sizes,
            } => EventMessage::TilesMatched(TilesMatchedMessage {
                msg_type: TilesMatchedType::TilesMatched,
                seq,
                cell_ids: cells.iter().map(CellPos::display_id).collect(),
                region_sizes: region_sizes.iter().map(|&s| s as u32).collect(),
            }),
            SessionEvent::ScoreAwarded {
                points,
                combo_level,
            } => EventMessage::ScoreAwarded(ScoreAwardedMessage {
                msg_type: ScoreAwardedType::ScoreAwarded,
                seq,
                points: *points,
                combo_level: *combo_level,
            }),
            SessionEvent::SessionEnded { won } => EventMessage::SessionEnded(SessionEndedMessage {
                msg_type: SessionEndedType::SessionEnded,
                seq,
                won: *won,
            }),
        }
    }

    pub fn seq(&self) -> u64 {
        match self {
            EventMessage::TilesMatched(m) => m.seq,
            EventMessage::ScoreAwarded(m) => m.seq,
            EventMessage::SessionEnded(m) => m.seq,
        }
    }

    /// Encode as one JSON line.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
