//! Session overrides of store-level tournament settings.
//!
//! A session may replace any of three groups (basic info, blind schedule,
//! prize table) for itself alone. Each group is replaced as a whole: when a slot
//! is present its value is used verbatim, null fields included, and the store
//! value for that group is ignored entirely.

use super::models::{BlindLevel, PrizeStructure, TournamentBasic, TournamentSettings};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Override state of one settings group.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideSlot<T> {
    /// Inherit the store value
    Absent,
    /// Replace the store value with this one
    Present(T),
}

impl<T> OverrideSlot<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, OverrideSlot::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            OverrideSlot::Present(value) => Some(value),
            OverrideSlot::Absent => None,
        }
    }

    /// The override value if present, otherwise `store`
    pub fn resolve<'a>(&'a self, store: &'a T) -> &'a T {
        self.as_option().unwrap_or(store)
    }
}

// Not derived: `#[derive(Default)]` would bound `T: Default`, which `TournamentBasic` is not.
impl<T> Default for OverrideSlot<T> {
    fn default() -> Self {
        OverrideSlot::Absent
    }
}

impl<T> From<Option<T>> for OverrideSlot<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(OverrideSlot::Absent, OverrideSlot::Present)
    }
}

impl<T: Serialize> Serialize for OverrideSlot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

/// Stored slots are nullable documents. A slot that does not parse as the
/// expected group is treated as absent so the session falls back to the store
/// settings instead of failing to load.
impl<'de, T: DeserializeOwned> Deserialize<'de> for OverrideSlot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(OverrideSlot::Absent);
        }

        match serde_json::from_value(raw) {
            Ok(value) => Ok(OverrideSlot::Present(value)),
            Err(e) => {
                log::warn!("Ignoring malformed override slot: {}", e);
                Ok(OverrideSlot::Absent)
            }
        }
    }
}

/// Settings group that can be overridden per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverrideGroup {
    Basic,
    BlindLevels,
    PrizeStructures,
}

/// Session-scoped replacements for store settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverride {
    #[serde(default)]
    pub basic: OverrideSlot<TournamentBasic>,
    #[serde(default)]
    pub blind_levels: OverrideSlot<Vec<BlindLevel>>,
    #[serde(default)]
    pub prize_structures: OverrideSlot<Vec<PrizeStructure>>,
}

impl SessionOverride {
    /// No overrides: everything inherits from the store
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a stored override document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn customize_basic(&mut self, basic: TournamentBasic) {
        self.basic = OverrideSlot::Present(basic);
    }

    pub fn customize_blind_levels(&mut self, levels: Vec<BlindLevel>) {
        self.blind_levels = OverrideSlot::Present(levels);
    }

    pub fn customize_prize_structures(&mut self, structures: Vec<PrizeStructure>) {
        self.prize_structures = OverrideSlot::Present(structures);
    }

    /// Revert one group to the store defaults
    pub fn revert(&mut self, group: OverrideGroup) {
        match group {
            OverrideGroup::Basic => self.basic = OverrideSlot::Absent,
            OverrideGroup::BlindLevels => self.blind_levels = OverrideSlot::Absent,
            OverrideGroup::PrizeStructures => self.prize_structures = OverrideSlot::Absent,
        }
    }

    /// Revert every group to the store defaults
    pub fn revert_all(&mut self) {
        *self = Self::none();
    }

    pub fn is_overridden(&self, group: OverrideGroup) -> bool {
        match group {
            OverrideGroup::Basic => self.basic.is_present(),
            OverrideGroup::BlindLevels => self.blind_levels.is_present(),
            OverrideGroup::PrizeStructures => self.prize_structures.is_present(),
        }
    }

    /// Groups currently overridden, in declaration order
    pub fn overridden_groups(&self) -> Vec<OverrideGroup> {
        [
            OverrideGroup::Basic,
            OverrideGroup::BlindLevels,
            OverrideGroup::PrizeStructures,
        ]
        .into_iter()
        .filter(|group| self.is_overridden(*group))
        .collect()
    }
}

/// Settings in effect for a session, with the provenance of each group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub basic: TournamentBasic,
    pub blind_levels: Vec<BlindLevel>,
    pub prize_structures: Vec<PrizeStructure>,
    pub has_basic_override: bool,
    pub has_blinds_override: bool,
    pub has_prizes_override: bool,
}

/// Merge store settings with a session's overrides
pub fn resolve(store: &TournamentSettings, overrides: &SessionOverride) -> EffectiveSettings {
    let effective = EffectiveSettings {
        basic: overrides.basic.resolve(&store.basic).clone(),
        blind_levels: overrides.blind_levels.resolve(&store.blind_levels).clone(),
        prize_structures: overrides
            .prize_structures
            .resolve(&store.prize_structures)
            .clone(),
        has_basic_override: overrides.basic.is_present(),
        has_blinds_override: overrides.blind_levels.is_present(),
        has_prizes_override: overrides.prize_structures.is_present(),
    };

    log::debug!(
        "Resolved tournament settings (overridden: {:?})",
        overrides.overridden_groups()
    );

    effective
}
