//! One evaluation pass over a live session.

use super::models::{LiveTournamentSession, SessionSnapshot};
use crate::structure::metrics::{self, StackMetricsInput};
use crate::structure::models::TournamentSettings;
use crate::structure::{clock, lookup, overrides};
use chrono::{DateTime, Utc};

/// Evaluate a session against store settings at `now`.
///
/// Overrides are resolved first; the blind clock, stack metrics, and prize
/// lookup then all read the effective settings and the same `now`, so the
/// displayed level and the big-blind figures can never disagree.
pub fn evaluate(
    store: &TournamentSettings,
    session: &LiveTournamentSession,
    now: DateTime<Utc>,
) -> SessionSnapshot {
    let effective = overrides::resolve(store, &session.overrides);

    let level = session
        .timer_started_at
        .and_then(|started| clock::current_level_info(&effective.blind_levels, started, now));

    let next_display_level = level
        .as_ref()
        .and_then(|info| clock::display_level_at(&effective.blind_levels, info.current_index + 1));

    let metrics = metrics::calculate(
        &StackMetricsInput {
            blind_levels: &effective.blind_levels,
            timer_started_at: session.timer_started_at,
            current_stack: session.current_stack,
            buy_in: effective.basic.buy_in,
            entries: session.entries,
            remaining: session.remaining,
            starting_stack: effective.basic.starting_stack,
        },
        now,
    );

    let prize_structure = session
        .entries
        .and_then(|entries| lookup::applicable_structure(&effective.prize_structures, entries));

    let prize_level = prize_structure
        .zip(session.remaining)
        .and_then(|(structure, position)| structure.level_for_position(position))
        .cloned();
    let prize_structure = prize_structure.cloned();

    log::debug!(
        "Evaluated session {} at {}: level {:?}, big blind {:?}",
        session.id,
        now,
        level.as_ref().and_then(|info| info.display_level),
        metrics.current_big_blind
    );

    SessionSnapshot {
        evaluated_at: now,
        effective,
        level,
        next_display_level,
        metrics,
        prize_structure,
        prize_level,
    }
}
