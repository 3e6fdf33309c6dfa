//! Live tournament session data models.

use crate::structure::overrides::SessionOverride;
use crate::structure::{
    CurrentLevelInfo, EffectiveSettings, PrizeLevel, PrizeStructure, StackMetrics,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session ID type
pub type SessionId = i64;

/// The parts of a tracked tournament session the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTournamentSession {
    /// Session ID
    pub id: SessionId,
    /// When the blind timer was started (None: no active timer)
    pub timer_started_at: Option<DateTime<Utc>>,
    /// Player's current chip count
    pub current_stack: i64,
    /// Total entries, if known
    pub entries: Option<u32>,
    /// Players remaining, if known
    pub remaining: Option<u32>,
    /// Session-scoped replacements for store settings
    #[serde(default)]
    pub overrides: SessionOverride,
}

impl LiveTournamentSession {
    /// Create a session with no timer, no field counts, and no overrides
    pub fn new(id: SessionId, current_stack: i64) -> Self {
        Self {
            id,
            timer_started_at: None,
            current_stack,
            entries: None,
            remaining: None,
            overrides: SessionOverride::none(),
        }
    }

    /// Start (or restart) the blind timer
    pub fn start_timer(&mut self, at: DateTime<Utc>) {
        self.timer_started_at = Some(at);
    }

    pub fn stop_timer(&mut self) {
        self.timer_started_at = None;
    }

    /// Record the field size
    pub fn with_field(mut self, entries: u32, remaining: u32) -> Self {
        self.entries = Some(entries);
        self.remaining = Some(remaining);
        self
    }
}

/// Everything the session view displays, evaluated against one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// The instant every figure was computed for
    pub evaluated_at: DateTime<Utc>,
    /// Settings in effect after overrides
    pub effective: EffectiveSettings,
    /// Blind clock state (None without a timer or schedule)
    pub level: Option<CurrentLevelInfo>,
    /// Display number of the next level (None if it is a break or there is none)
    pub next_display_level: Option<u32>,
    /// Stack and pool figures
    pub metrics: StackMetrics,
    /// Prize structure selected by the entry count
    pub prize_structure: Option<PrizeStructure>,
    /// Prize level the player would finish in at the current remaining count
    pub prize_level: Option<PrizeLevel>,
}
