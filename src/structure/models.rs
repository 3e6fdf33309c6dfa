//! Tournament structure data models: blind levels, prize tables, and basic info.
//!
//! These are the documents the session service persists verbatim. Field names
//! serialize in camelCase so stored JSON round-trips without a mapping layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the blind schedule.
///
/// Breaks carry no blinds and are excluded from player-facing level numbering,
/// but they still consume their duration on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindLevel {
    /// Display/sort key among non-break levels
    pub level: u32,
    /// Whether this stage is a break
    #[serde(default)]
    pub is_break: bool,
    /// Small blind amount (None on breaks)
    pub small_blind: Option<i64>,
    /// Big blind amount (None on breaks)
    pub big_blind: Option<i64>,
    /// Ante amount (optional)
    pub ante: Option<i64>,
    /// Duration of this stage in minutes
    pub duration_minutes: u32,
}

impl BlindLevel {
    /// Create a new blind level
    pub fn new(level: u32, small_blind: i64, big_blind: i64, duration_minutes: u32) -> Self {
        Self {
            level,
            is_break: false,
            small_blind: Some(small_blind),
            big_blind: Some(big_blind),
            ante: None,
            duration_minutes,
        }
    }

    /// Create a break of the given length
    pub fn break_for(duration_minutes: u32) -> Self {
        Self {
            level: 0,
            is_break: true,
            small_blind: None,
            big_blind: None,
            ante: None,
            duration_minutes,
        }
    }

    /// Create a blind level with ante
    pub fn with_ante(mut self, ante: i64) -> Self {
        self.ante = Some(ante);
        self
    }

    /// Duration of this stage in seconds
    pub fn duration_seconds(&self) -> i64 {
        i64::from(self.duration_minutes) * 60
    }
}

/// What a single prize item pays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "prizeType", rename_all = "camelCase")]
pub enum PrizeItemKind {
    /// Percentage component; a level's percentage items total 100
    Percentage { percentage: f64 },
    /// Fixed currency amount
    FixedAmount { amount: i64 },
    /// Non-monetary prize such as a trophy or a satellite seat
    Custom { label: String, value: String },
}

/// A prize item with its position in the editor's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeItem {
    #[serde(flatten)]
    pub kind: PrizeItemKind,
    #[serde(default)]
    pub sort_order: i32,
}

impl PrizeItem {
    pub fn percentage(percentage: f64) -> Self {
        Self {
            kind: PrizeItemKind::Percentage { percentage },
            sort_order: 0,
        }
    }

    pub fn fixed_amount(amount: i64) -> Self {
        Self {
            kind: PrizeItemKind::FixedAmount { amount },
            sort_order: 0,
        }
    }

    pub fn custom(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: PrizeItemKind::Custom {
                label: label.into(),
                value: value.into(),
            },
            sort_order: 0,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Percentage value if this is a percentage item
    pub fn as_percentage(&self) -> Option<f64> {
        match self.kind {
            PrizeItemKind::Percentage { percentage } => Some(percentage),
            PrizeItemKind::FixedAmount { .. } | PrizeItemKind::Custom { .. } => None,
        }
    }
}

/// Inclusive range of total entrants. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl EntryRange {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Upper bound with `None` treated as infinity
    fn upper(&self) -> u64 {
        self.max.map_or(u64::MAX, u64::from)
    }

    /// Whether both ranges describe at least one common entrant count
    pub fn overlaps(&self, other: &EntryRange) -> bool {
        u64::from(self.min) <= other.upper() && u64::from(other.min) <= self.upper()
    }

    pub fn contains(&self, entries: u32) -> bool {
        self.min <= entries && u64::from(entries) <= self.upper()
    }
}

impl fmt::Display for EntryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Inclusive range of finishing positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRange {
    pub min: u32,
    pub max: u32,
}

impl PositionRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn overlaps(&self, other: &PositionRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn contains(&self, position: u32) -> bool {
        self.min <= position && position <= self.max
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Prizes paid to a range of finishing positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeLevel {
    pub min_position: u32,
    pub max_position: u32,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub prize_items: Vec<PrizeItem>,
}

impl PrizeLevel {
    /// Create a prize level paying the given positions
    pub fn new(min_position: u32, max_position: u32, prize_items: Vec<PrizeItem>) -> Self {
        Self {
            min_position,
            max_position,
            sort_order: 0,
            prize_items,
        }
    }

    pub fn position_range(&self) -> PositionRange {
        PositionRange::new(self.min_position, self.max_position)
    }

    /// Items in editor order
    pub fn sorted_items(&self) -> Vec<&PrizeItem> {
        let mut items: Vec<&PrizeItem> = self.prize_items.iter().collect();
        items.sort_by_key(|item| item.sort_order);
        items
    }
}

/// Prize table that applies to a range of entrant counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeStructure {
    pub min_entrants: u32,
    pub max_entrants: Option<u32>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub prize_levels: Vec<PrizeLevel>,
}

impl PrizeStructure {
    /// Create a prize structure for the given entrant range
    pub fn new(min_entrants: u32, max_entrants: Option<u32>, prize_levels: Vec<PrizeLevel>) -> Self {
        Self {
            min_entrants,
            max_entrants,
            sort_order: 0,
            prize_levels,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn entry_range(&self) -> EntryRange {
        EntryRange::new(self.min_entrants, self.max_entrants)
    }

    /// Prize level paying the given finishing position (1-indexed)
    pub fn level_for_position(&self, position: u32) -> Option<&PrizeLevel> {
        self.prize_levels
            .iter()
            .filter(|level| level.position_range().contains(position))
            .min_by_key(|level| level.sort_order)
    }

    /// Lowest finishing position that is still paid, or 0 if nothing is paid
    pub fn paid_positions(&self) -> u32 {
        self.prize_levels
            .iter()
            .map(|level| level.max_position)
            .max()
            .unwrap_or(0)
    }
}

/// Basic tournament information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentBasic {
    /// Tournament name
    pub name: Option<String>,
    /// Buy-in amount
    pub buy_in: i64,
    /// Rake taken by the house
    pub rake: Option<i64>,
    /// Starting chip stack for each entrant
    pub starting_stack: Option<i64>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl TournamentBasic {
    pub fn new(buy_in: i64) -> Self {
        Self {
            name: None,
            buy_in,
            rake: None,
            starting_stack: None,
            notes: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_starting_stack(mut self, starting_stack: i64) -> Self {
        self.starting_stack = Some(starting_stack);
        self
    }
}

/// Store-level canonical definition of a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    pub basic: TournamentBasic,
    #[serde(default)]
    pub blind_levels: Vec<BlindLevel>,
    #[serde(default)]
    pub prize_structures: Vec<PrizeStructure>,
}

impl TournamentSettings {
    /// Parse a stored settings document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Standard deepstack structure: 20-minute levels with a break every four levels
    ///
    /// Prize tiers (one level per structure, items totalling 100%):
    /// - up to 5 entrants: winner takes all
    /// - 6-9 entrants: 60/40 split across 1st-2nd
    /// - 10+ entrants: 50/30/20 split across 1st-3rd
    pub fn standard(name: impl Into<String>, buy_in: i64) -> Self {
        let basic = TournamentBasic::new(buy_in)
            .with_name(name)
            .with_starting_stack(buy_in.saturating_mul(50)); // 50x buy-in starting stack

        let blinds = [
            (10, 20),
            (15, 30),
            (20, 40),
            (30, 60),
            (40, 80),
            (60, 120),
            (80, 160),
            (120, 240),
            (160, 320),
            (240, 480),
        ];

        let mut blind_levels = Vec::with_capacity(blinds.len() + 2);
        for (idx, (small_blind, big_blind)) in blinds.into_iter().enumerate() {
            let level = idx as u32 + 1;
            blind_levels.push(BlindLevel::new(level, small_blind, big_blind, 20));
            if level == 4 || level == 8 {
                blind_levels.push(BlindLevel::break_for(10));
            }
        }

        Self {
            basic,
            blind_levels,
            prize_structures: standard_prize_structures(),
        }
    }

    /// Turbo structure (faster levels, no breaks)
    pub fn turbo(name: impl Into<String>, buy_in: i64) -> Self {
        let mut settings = Self::standard(name, buy_in);
        settings.blind_levels.retain(|level| !level.is_break);
        for level in &mut settings.blind_levels {
            level.duration_minutes = 8;
        }
        settings
    }
}

fn standard_prize_structures() -> Vec<PrizeStructure> {
    vec![
        PrizeStructure::new(1, Some(5), vec![split(&[100.0])]).with_sort_order(0),
        PrizeStructure::new(6, Some(9), vec![split(&[60.0, 40.0])]).with_sort_order(1),
        PrizeStructure::new(10, None, vec![split(&[50.0, 30.0, 20.0])]).with_sort_order(2),
    ]
}

/// A single level paying positions 1..=shares.len(), one percentage item per share
fn split(shares: &[f64]) -> PrizeLevel {
    let items = shares
        .iter()
        .enumerate()
        .map(|(idx, share)| PrizeItem::percentage(*share).with_sort_order(idx as i32))
        .collect();
    PrizeLevel::new(1, shares.len() as u32, items)
}
