//! Scoring - points per resolution pass and combo bonuses.
//!
//! A pass is one full-grid scan that found at least one qualifying region.
//! It pays a flat rate per matched tile plus a combo bonus computed from the
//! combo count *before* the pass incremented it: the first pass of a chain
//! pays no bonus, the second pays one step, and so on.

use slide_match_types::{COMBO_BONUS_STEP, TILE_POINTS};

/// Points breakdown for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassScore {
    /// Flat per-tile points for the pass.
    pub pass_points: u32,
    /// Combo bonus added on top.
    pub combo_bonus: u32,
    pub total: u32,
}

/// Flat points for `matched_tiles` cleared in one pass.
pub fn pass_points(matched_tiles: usize) -> u32 {
    (matched_tiles as u32).saturating_mul(TILE_POINTS)
}

/// Bonus for a pass that starts with `combo_before` chained passes banked.
pub fn combo_bonus(combo_before: u32) -> u32 {
    combo_before.saturating_mul(COMBO_BONUS_STEP)
}

/// Complete score for one pass.
pub fn score_pass(matched_tiles: usize, combo_before: u32) -> PassScore {
    let pass_points = pass_points(matched_tiles);
    let combo_bonus = combo_bonus(combo_before);
    PassScore {
        pass_points,
        combo_bonus,
        total: pass_points.saturating_add(combo_bonus),
    }
}
