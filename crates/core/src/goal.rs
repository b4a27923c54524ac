//! Goal evaluation - mode-based win/loss decisions.
//!
//! Pure functions over the session's counters. The win condition is always
//! checked before the loss condition, so reaching the target score on the
//! exact tick or move that exhausts the budget counts as a win.

use slide_match_types::Mode;

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalVerdict {
    Continue,
    Won,
    Lost,
}

/// Evaluate the session goal for the current counters.
///
/// `time_remaining`/`moves_remaining` are `None` for modes that do not track
/// them. A `None` target can never be reached, which makes endless sessions
/// (and misconfigured limited ones) simply run forever.
pub fn evaluate_goal(
    mode: Mode,
    score: u32,
    target_score: Option<u32>,
    time_remaining: Option<u32>,
    moves_remaining: Option<u32>,
) -> GoalVerdict {
    let target_met = target_score.is_some_and(|target| score >= target);

    match mode {
        Mode::Endless => GoalVerdict::Continue,
        Mode::TimeAttack => {
            if target_met {
                GoalVerdict::Won
            } else if time_remaining == Some(0) {
                GoalVerdict::Lost
            } else {
                GoalVerdict::Continue
            }
        }
        Mode::MoveChallenge => {
            if target_met {
                GoalVerdict::Won
            } else if moves_remaining == Some(0) {
                GoalVerdict::Lost
            } else {
                GoalVerdict::Continue
            }
        }
    }
}
