use crate::battle::{run_battle, BattleSummary};
use crate::battle_log::BattleLog;
use crate::error::ArenaError;
use crate::trainer::Trainer;
use rand::Rng;
use serde::Serialize;

/// Cumulative tallies for a whole series. `total_rounds` sums the
/// per-battle round counters, which themselves restart at every battle.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesSummary {
    pub battles: usize,
    pub total_rounds: usize,
    pub results: Vec<BattleSummary>,
}

/// A configured run of consecutive battles between the same two trainers.
///
/// Belts are never replenished between battles: a creature defeated in
/// battle 1 stays gone in battle 2, and a battle starting against an empty
/// belt completes immediately with zero rounds. The series is steppable so
/// a caller can interleave prompts between battles.
#[derive(Clone, Debug)]
pub struct Series {
    planned: usize,
    fought: usize,
    total_rounds: usize,
    results: Vec<BattleSummary>,
}

impl Series {
    pub fn new(planned: usize) -> Self {
        Self {
            planned,
            fought: 0,
            total_rounds: 0,
            results: Vec::new(),
        }
    }

    pub fn planned(&self) -> usize {
        self.planned
    }

    pub fn battles_fought(&self) -> usize {
        self.fought
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    pub fn is_finished(&self) -> bool {
        self.fought >= self.planned
    }

    /// Fight the next battle of the series, or `None` once the configured
    /// count has been reached.
    pub fn next_battle(
        &mut self,
        trainer_a: &mut Trainer,
        trainer_b: &mut Trainer,
        rng: &mut impl Rng,
        log: &mut BattleLog,
    ) -> Option<BattleSummary> {
        if self.is_finished() {
            return None;
        }
        log.log_battle_start(self.fought + 1);
        let summary = run_battle(trainer_a, trainer_b, rng, log);
        self.fought += 1;
        self.total_rounds += summary.rounds;
        self.results.push(summary.clone());
        Some(summary)
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            battles: self.fought,
            total_rounds: self.total_rounds,
            results: self.results.clone(),
        }
    }
}

/// One-shot convenience: run the whole series back to back.
pub fn run_series(
    trainer_a: &mut Trainer,
    trainer_b: &mut Trainer,
    battles: usize,
    rng: &mut impl Rng,
    log: &mut BattleLog,
) -> SeriesSummary {
    let mut series = Series::new(battles);
    while series.next_battle(trainer_a, trainer_b, rng, log).is_some() {}
    series.summary()
}

/// Parse the operator's battle count as a typed result instead of letting
/// a bad line abort the process.
pub fn parse_battle_count(input: &str) -> Result<usize, ArenaError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| ArenaError::InvalidBattleCount(trimmed.to_string()))
}
