//! Error types for the structure module

use super::models::{EntryRange, PositionRange};
use thiserror::Error;

/// Result type for prize table validation
pub type PrizeValidationResult<T> = Result<T, PrizeValidationError>;

/// Reasons an edited prize table cannot be saved
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrizeValidationError {
    /// Two prize structures cover the same entrant count
    #[error("Entry ranges overlap: {first} and {second}")]
    EntryRangeOverlap {
        first: EntryRange,
        second: EntryRange,
    },

    /// Two prize levels in one structure pay the same position
    #[error("Position ranges overlap for entries {entries}: {first} and {second}")]
    PositionRangeOverlap {
        entries: EntryRange,
        first: PositionRange,
        second: PositionRange,
    },

    /// Percentage items of one prize level do not add up to 100
    #[error("Percentages for entries {entries}, positions {positions} total {total:.2}, expected 100")]
    PercentageTotal {
        entries: EntryRange,
        positions: PositionRange,
        total: f64,
    },
}

impl PrizeValidationError {
    /// Entry range of the structure the violation was found in
    pub fn entry_range(&self) -> EntryRange {
        match self {
            PrizeValidationError::EntryRangeOverlap { first, .. } => *first,
            PrizeValidationError::PositionRangeOverlap { entries, .. }
            | PrizeValidationError::PercentageTotal { entries, .. } => *entries,
        }
    }
}

/// Result type for blind schedule validation
pub type BlindScheduleResult<T> = Result<T, BlindScheduleError>;

/// Reasons an edited blind schedule cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlindScheduleError {
    /// Level does not consume any time
    #[error("Level at index {index} has zero duration")]
    ZeroDuration { index: usize },

    /// Playing level without a big blind
    #[error("Level at index {index} has no big blind")]
    MissingBigBlind { index: usize },

    /// Big blind smaller than the small blind
    #[error("Level at index {index}: big blind {big_blind} is below small blind {small_blind}")]
    BigBlindBelowSmallBlind {
        index: usize,
        small_blind: i64,
        big_blind: i64,
    },

    /// Blind or ante amount below zero
    #[error("Level at index {index} has a negative blind or ante")]
    NegativeAmount { index: usize },
}
