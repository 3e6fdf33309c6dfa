//! Tournament structure engine.
//!
//! Pure computations over a tournament's blind schedule and prize table:
//! - Blind clock: current/next level and time remaining from a start time and `now`
//! - Prize table validation before an edit is saved
//! - Resolution of store settings against session overrides
//! - Stack metrics (prize pool, average stack, stacks in big blinds)
//! - Prize structure lookup
//!
//! None of these hold state or perform I/O. Callers pass `now` explicitly.
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use tourney_engine::structure::{
//!     SessionOverride, TournamentSettings, clock, overrides, validate_prize_structures,
//! };
//!
//! let store = TournamentSettings::standard("Sunday Special", 100);
//! let effective = overrides::resolve(&store, &SessionOverride::none());
//! assert!(validate_prize_structures(&effective.prize_structures).is_ok());
//!
//! let started = Utc::now();
//! let info = clock::current_level_info(&effective.blind_levels, started, started + Duration::minutes(25))
//!     .expect("schedule is not empty");
//! assert_eq!(info.display_level, Some(2));
//! ```

pub mod clock;
pub mod errors;
pub mod lookup;
pub mod metrics;
pub mod models;
pub mod overrides;
pub mod validator;

pub use clock::{CurrentLevelInfo, current_big_blind, current_level_info, display_level_at};
pub use errors::{
    BlindScheduleError, BlindScheduleResult, PrizeValidationError, PrizeValidationResult,
};
pub use lookup::{applicable_structure, prize_level_for};
pub use metrics::{StackMetrics, StackMetricsInput};
pub use models::{
    BlindLevel, EntryRange, PositionRange, PrizeItem, PrizeItemKind, PrizeLevel, PrizeStructure,
    TournamentBasic, TournamentSettings,
};
pub use overrides::{EffectiveSettings, OverrideGroup, OverrideSlot, SessionOverride};
pub use validator::{PrizeStructureValidator, validate_blind_levels, validate_prize_structures};
