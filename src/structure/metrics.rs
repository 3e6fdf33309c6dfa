//! Stack and prize pool figures for display.
//!
//! Every figure is optional. Unknown inputs, zero denominators, and overflowing
//! products all produce `None` rather than an error or a non-finite number.

use super::clock;
use super::models::BlindLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inputs for one metrics evaluation
#[derive(Debug, Clone, Copy)]
pub struct StackMetricsInput<'a> {
    /// Effective blind schedule
    pub blind_levels: &'a [BlindLevel],
    /// When the blind timer started (None: no blind-derived figures)
    pub timer_started_at: Option<DateTime<Utc>>,
    /// Player's current stack
    pub current_stack: i64,
    /// Tournament buy-in
    pub buy_in: i64,
    /// Total entries, if known
    pub entries: Option<u32>,
    /// Players still in, if known
    pub remaining: Option<u32>,
    /// Starting stack per entry, if known
    pub starting_stack: Option<i64>,
}

/// Derived stack figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackMetrics {
    pub current_big_blind: Option<i64>,
    pub prize_pool: Option<i64>,
    pub total_chips_in_play: Option<i64>,
    pub average_stack: Option<i64>,
    pub stack_in_bb: Option<i64>,
    pub average_in_bb: Option<i64>,
}

/// Compute stack metrics at `now`
pub fn calculate(input: &StackMetricsInput<'_>, now: DateTime<Utc>) -> StackMetrics {
    let current_big_blind = input
        .timer_started_at
        .and_then(|started| clock::current_big_blind(input.blind_levels, started, now));

    let entries = input.entries.map(i64::from);
    let prize_pool = entries.and_then(|entries| product("prize pool", entries, input.buy_in));
    let total_chips_in_play = entries
        .zip(input.starting_stack)
        .and_then(|(entries, stack)| product("chips in play", entries, stack));

    let average_stack = total_chips_in_play
        .zip(input.remaining)
        .and_then(|(total, remaining)| rounded_ratio(total, i64::from(remaining)));

    let stack_in_bb = current_big_blind.and_then(|bb| rounded_ratio(input.current_stack, bb));
    let average_in_bb = average_stack
        .zip(current_big_blind)
        .and_then(|(average, bb)| rounded_ratio(average, bb));

    StackMetrics {
        current_big_blind,
        prize_pool,
        total_chips_in_play,
        average_stack,
        stack_in_bb,
        average_in_bb,
    }
}

fn product(what: &str, a: i64, b: i64) -> Option<i64> {
    let result = a.checked_mul(b);
    if result.is_none() {
        log::warn!("Overflow computing {} ({} x {})", what, a, b);
    }
    result
}

/// `numerator / denominator` rounded to the nearest integer, halves away from zero
fn rounded_ratio(numerator: i64, denominator: i64) -> Option<i64> {
    if denominator == 0 {
        return None;
    }

    let ratio = (numerator as f64 / denominator as f64).round();
    ratio.is_finite().then_some(ratio as i64)
}
