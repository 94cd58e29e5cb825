use crate::trainer::MAX_POKEBALLS;
use thiserror::Error;

/// Fatal domain errors. Soft failures (ball already open, ball empty,
/// recall on a closed ball) are never errors; they degrade to `|fault|`
/// diagnostics in the battle log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Species '{0}' not found in SPECIES table")]
    UnknownSpecies(String),

    #[error("Trainer's belt is full, cannot hold more than {MAX_POKEBALLS} pokeballs")]
    BeltFull,

    #[error("Invalid battle count '{0}', expected a non-negative integer")]
    InvalidBattleCount(String),
}
