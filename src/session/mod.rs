//! Live session evaluation.
//!
//! Combines the structure engine's components into a single pass over one
//! tracked tournament session, so that a UI refresh loop gets every displayed
//! figure from the same `now`.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use tourney_engine::session::{LiveTournamentSession, evaluate};
//! use tourney_engine::structure::TournamentSettings;
//!
//! let store = TournamentSettings::standard("Friday Deepstack", 200);
//! let mut session = LiveTournamentSession::new(1, 10_000).with_field(45, 18);
//! session.start_timer(Utc::now());
//!
//! let snapshot = evaluate(&store, &session, Utc::now());
//! assert_eq!(snapshot.metrics.prize_pool, Some(9000));
//! ```

pub mod models;
pub mod snapshot;

pub use models::{LiveTournamentSession, SessionId, SessionSnapshot};
pub use snapshot::evaluate;
