//! Turn-based trainer battles over a cyclic type triangle.
//!
//! Two trainers each carry a belt of pokeballs. Every round one ball per
//! side is drawn at random and the held creatures are compared by type
//! advantage; the loser's ball leaves the belt. Battles repeat across a
//! series without the belts ever being replenished. The main entry points
//! are [`battle::run_battle`] and [`arena::run_series`].

pub mod arena;
pub mod battle;
pub mod battle_log;
pub mod creature;
pub mod error;
pub mod pokeball;
pub mod trainer;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::arena::{parse_battle_count, run_series, Series, SeriesSummary};
    pub use crate::battle::{
        resolve_round, run_battle, BattleOutcome, BattleSummary, RoundResult, Side, MAX_ROUNDS,
    };
    pub use crate::battle_log::BattleLog;
    pub use crate::creature::{species_from_id, Creature, ElementType, Species};
    pub use crate::error::ArenaError;
    pub use crate::pokeball::Pokeball;
    pub use crate::trainer::{Belt, Trainer, DEFAULT_ROSTER, MAX_POKEBALLS};
}
