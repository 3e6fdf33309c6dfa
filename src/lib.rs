//! # Tourney Engine
//!
//! Tournament structure engine for tracking live poker sessions.
//!
//! Turns a tournament's blind schedule and prize table into live, time-derived
//! state, validates edited prize tables before they are saved, and resolves
//! store-wide settings against session-specific overrides. Every computation is
//! a pure function of its inputs and an explicit `now`; persistence, transport,
//! and refresh scheduling belong to the calling service.
//!
//! ## Core Modules
//!
//! - [`structure`]: Blind clock, prize validation, override resolution, stack metrics, prize lookup
//! - [`session`]: One evaluation pass over a live session
//! - [`config`]: Engine tunables
//!
//! ## Example
//!
//! ```
//! use tourney_engine::structure::{PrizeItem, PrizeLevel, PrizeStructure, validate_prize_structures};
//!
//! let table = vec![PrizeStructure::new(
//!     1,
//!     Some(9),
//!     vec![PrizeLevel::new(1, 1, vec![PrizeItem::percentage(60.0)])],
//! )];
//!
//! let err = validate_prize_structures(&table).unwrap_err();
//! assert_eq!(err.to_string(), "Percentages for entries 1-9, positions 1-1 total 60.00, expected 100");
//! ```

/// Engine configuration.
pub mod config;
pub use config::{ConfigError, EngineConfig};

/// Tournament structure computations.
pub mod structure;
pub use structure::{
    BlindLevel, CurrentLevelInfo, EffectiveSettings, PrizeStructure, PrizeStructureValidator,
    PrizeValidationError, SessionOverride, StackMetrics, TournamentBasic, TournamentSettings,
};

/// Live session evaluation.
pub mod session;
pub use session::{LiveTournamentSession, SessionSnapshot};
