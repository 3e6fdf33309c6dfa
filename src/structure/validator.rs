//! Validation of edited prize tables and blind schedules before they are saved.

use super::errors::{
    BlindScheduleError, BlindScheduleResult, PrizeValidationError, PrizeValidationResult,
};
use super::models::{BlindLevel, PrizeLevel, PrizeStructure};
use crate::config::{DEFAULT_PERCENTAGE_TOLERANCE, EngineConfig};

/// Checks an editor's working copy of the prize table.
///
/// Checks run in this order and the first failure is reported:
/// 1. No two structures cover the same entrant count
/// 2. No two levels of one structure pay the same position
/// 3. Percentage items of each level add up to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrizeStructureValidator {
    /// Allowed absolute deviation of a percentage total from 100
    tolerance: f64,
}

impl PrizeStructureValidator {
    /// Create a validator with the default tolerance
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_PERCENTAGE_TOLERANCE)
    }

    /// Create a validator with a custom percentage tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Create a validator from engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_tolerance(config.percentage_tolerance)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validate a list of prize structures
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Table can be saved (empty tables are valid)
    /// * `Err(PrizeValidationError)` - First violation found, with the offending ranges
    pub fn validate(&self, structures: &[PrizeStructure]) -> PrizeValidationResult<()> {
        let result = check_entry_ranges(structures)
            .and_then(|()| structures.iter().try_for_each(check_position_ranges))
            .and_then(|()| {
                structures
                    .iter()
                    .try_for_each(|structure| self.check_percentages(structure))
            });

        if let Err(err) = &result {
            log::debug!("Prize table rejected: {}", err);
        }
        result
    }

    fn check_percentages(&self, structure: &PrizeStructure) -> PrizeValidationResult<()> {
        for level in &structure.prize_levels {
            let Some(total) = percentage_total(level) else {
                continue;
            };

            let within_tolerance = (total - 100.0).abs() <= self.tolerance;
            if !within_tolerance {
                return Err(PrizeValidationError::PercentageTotal {
                    entries: structure.entry_range(),
                    positions: level.position_range(),
                    total,
                });
            }
        }
        Ok(())
    }
}

impl Default for PrizeStructureValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate prize structures with the default tolerance
pub fn validate_prize_structures(structures: &[PrizeStructure]) -> PrizeValidationResult<()> {
    PrizeStructureValidator::new().validate(structures)
}

fn check_entry_ranges(structures: &[PrizeStructure]) -> PrizeValidationResult<()> {
    for (i, first) in structures.iter().enumerate() {
        for second in &structures[i + 1..] {
            let (a, b) = (first.entry_range(), second.entry_range());
            if a.overlaps(&b) {
                return Err(PrizeValidationError::EntryRangeOverlap {
                    first: a,
                    second: b,
                });
            }
        }
    }
    Ok(())
}

fn check_position_ranges(structure: &PrizeStructure) -> PrizeValidationResult<()> {
    let levels = &structure.prize_levels;
    for (i, first) in levels.iter().enumerate() {
        for second in &levels[i + 1..] {
            let (a, b) = (first.position_range(), second.position_range());
            if a.overlaps(&b) {
                return Err(PrizeValidationError::PositionRangeOverlap {
                    entries: structure.entry_range(),
                    first: a,
                    second: b,
                });
            }
        }
    }
    Ok(())
}

/// Sum of percentage items, or None when the level has none
fn percentage_total(level: &PrizeLevel) -> Option<f64> {
    let mut percentages = level
        .prize_items
        .iter()
        .filter_map(|item| item.as_percentage())
        .peekable();

    percentages.peek()?;
    Some(percentages.sum())
}

/// Validate an edited blind schedule
///
/// Rejects levels the clock cannot meaningfully time: zero durations, playing
/// levels without a big blind, inverted blinds, and negative amounts.
pub fn validate_blind_levels(levels: &[BlindLevel]) -> BlindScheduleResult<()> {
    for (index, level) in levels.iter().enumerate() {
        if level.duration_minutes == 0 {
            return Err(BlindScheduleError::ZeroDuration { index });
        }

        let amounts = [level.small_blind, level.big_blind, level.ante];
        if amounts.iter().flatten().any(|amount| *amount < 0) {
            return Err(BlindScheduleError::NegativeAmount { index });
        }

        if level.is_break {
            continue;
        }

        let Some(big_blind) = level.big_blind else {
            return Err(BlindScheduleError::MissingBigBlind { index });
        };

        match level.small_blind {
            Some(small_blind) if big_blind < small_blind => {
                return Err(BlindScheduleError::BigBlindBelowSmallBlind {
                    index,
                    small_blind,
                    big_blind,
                });
            }
            _ => {}
        }
    }
    Ok(())
}
