//! Blind schedule clock.
//!
//! Derives the live blind level from a level list, the moment the blind timer
//! was started, and the current time. Nothing is stored between calls: every
//! tick recomputes the state from scratch, so callers evaluating once per second
//! need no synchronization.
//!
//! Levels are walked in array order as one contiguous timeline. Breaks consume
//! their duration but are skipped when numbering levels for display. Once the
//! whole schedule has elapsed the clock freezes on the final level with zero
//! seconds remaining.

use super::models::BlindLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live state of the blind schedule at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLevelInfo {
    /// Index of the current level in the schedule
    pub current_index: usize,
    /// The level being played (or the break being taken)
    pub current_level: BlindLevel,
    /// Seconds until the current level ends (0 once the schedule is exhausted)
    pub remaining_seconds: i64,
    /// Level that follows the current one
    pub next_level: Option<BlindLevel>,
    /// Whether the current level is a break
    pub is_break: bool,
    /// 1-based number among non-break levels, None during a break
    pub display_level: Option<u32>,
}

impl CurrentLevelInfo {
    fn at(levels: &[BlindLevel], index: usize, remaining_seconds: i64, played: u32) -> Self {
        let current_level = levels[index].clone();
        let is_break = current_level.is_break;

        Self {
            current_index: index,
            current_level,
            remaining_seconds,
            next_level: levels.get(index + 1).cloned(),
            is_break,
            display_level: (!is_break).then_some(played),
        }
    }

    /// Seconds already spent in the current level
    pub fn elapsed_in_level_seconds(&self) -> i64 {
        self.current_level.duration_seconds() - self.remaining_seconds
    }

    /// Whether the schedule has run out and the clock is frozen on the last level
    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }
}

/// Whole seconds between timer start and `now`, floored.
///
/// A `now` earlier than the timer start counts as zero elapsed time.
pub fn elapsed_seconds(timer_started_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - timer_started_at)
        .num_milliseconds()
        .div_euclid(1000)
        .max(0)
}

/// Compute the current blind level.
///
/// Returns `None` when the schedule is empty.
pub fn current_level_info(
    levels: &[BlindLevel],
    timer_started_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<CurrentLevelInfo> {
    let last_index = levels.len().checked_sub(1)?;
    let elapsed = elapsed_seconds(timer_started_at, now);

    let mut accumulated = 0i64;
    let mut played = 0u32;

    for (index, level) in levels.iter().enumerate() {
        if level.duration_minutes == 0 {
            log::warn!("Blind level at index {} has zero duration, skipping", index);
        }

        accumulated += level.duration_seconds();
        if !level.is_break {
            played += 1;
        }

        if elapsed < accumulated {
            return Some(CurrentLevelInfo::at(
                levels,
                index,
                accumulated - elapsed,
                played,
            ));
        }
    }

    log::debug!(
        "Blind schedule exhausted after {}s ({}s elapsed), holding final level",
        accumulated,
        elapsed
    );

    Some(CurrentLevelInfo::at(levels, last_index, 0, played))
}

/// Big blind in effect at `now`.
///
/// During a break this is the big blind of the last level played before it,
/// and past the end of the schedule it is the final level's big blind.
pub fn current_big_blind(
    levels: &[BlindLevel],
    timer_started_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<i64> {
    let elapsed = elapsed_seconds(timer_started_at, now);

    let mut accumulated = 0i64;
    let mut last_big_blind = None;

    for level in levels {
        accumulated += level.duration_seconds();
        if !level.is_break {
            last_big_blind = level.big_blind;
        }

        if elapsed < accumulated {
            return last_big_blind;
        }
    }

    last_big_blind
}

/// Player-facing level number of the level at `index`.
///
/// Counts non-break levels from the start of the schedule through `index`.
/// Returns `None` for breaks and out-of-range indices.
pub fn display_level_at(levels: &[BlindLevel], index: usize) -> Option<u32> {
    let target = levels.get(index)?;
    if target.is_break {
        return None;
    }

    let count = levels[..=index].iter().filter(|level| !level.is_break).count();
    Some(count as u32)
}

/// Total length of the schedule in seconds, breaks included
pub fn total_duration_seconds(levels: &[BlindLevel]) -> i64 {
    levels.iter().map(BlindLevel::duration_seconds).sum()
}

/// Offset from timer start at which the level at `index` begins
pub fn level_start_seconds(levels: &[BlindLevel], index: usize) -> Option<i64> {
    if index >= levels.len() {
        return None;
    }
    Some(total_duration_seconds(&levels[..index]))
}
