use crate::battle_log::BattleLog;
use crate::trainer::Trainer;
use rand::Rng;
use serde::Serialize;

/// Safety bound against non-terminating draw chains: two belts that only
/// ever draw after round 0 never shrink, so the loop is cut here and the
/// battle scored by remaining ball counts.
pub const MAX_ROUNDS: usize = 1000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Side {
    A,
    B,
}

/// Result of a single round.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundResult {
    Win(Side),
    Draw,
}

/// Terminal outcome of a battle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum BattleOutcome {
    Win(Side),
    Draw,
}

#[derive(Clone, Debug, Serialize)]
pub struct BattleSummary {
    /// Rounds fought in this battle; resets for every battle.
    pub rounds: usize,
    pub outcome: BattleOutcome,
}

/// Resolve one round between two non-empty belts.
///
/// A fresh uniform index is drawn into each belt, independently per side.
/// The selected creatures are compared by the type triangle: the side whose
/// strength matches the other's weakness wins and the loser's ball is
/// removed. Draws remove both balls on round 0 and neither ball afterwards.
///
/// The recall issued on a removed ball is always a logged no-op (the ball
/// is closed); the asymmetric gating in [`crate::pokeball::Pokeball`] is
/// intentional and preserved here.
pub fn resolve_round(
    trainer_a: &mut Trainer,
    trainer_b: &mut Trainer,
    round: usize,
    rng: &mut impl Rng,
    log: &mut BattleLog,
) -> RoundResult {
    let idx_a = rng.gen_range(0..trainer_a.belt.len());
    let idx_b = rng.gen_range(0..trainer_b.belt.len());

    let peek = |trainer: &Trainer, idx: usize| {
        trainer
            .belt
            .get(idx)
            .and_then(|ball| ball.creature())
            .map(|c| (c.name().to_string(), c.strength(), c.weakness()))
    };
    let (Some((name_a, strength_a, weakness_a)), Some((name_b, strength_b, weakness_b))) =
        (peek(trainer_a, idx_a), peek(trainer_b, idx_b))
    else {
        // belts only ever hold occupied balls; an empty one is a bug upstream
        log.log_fault("Selected pokeball is empty");
        return RoundResult::Draw;
    };

    log.log_throw(&trainer_a.name, &name_a);
    log.log_throw(&trainer_b.name, &name_b);

    if strength_a == weakness_b {
        log.log_win(&name_a);
        if let Some(ball) = trainer_b.belt.get_mut(idx_b) {
            ball.recall(log);
        }
        trainer_b.belt.remove(idx_b);
        RoundResult::Win(Side::A)
    } else if strength_b == weakness_a {
        log.log_win(&name_b);
        if let Some(ball) = trainer_a.belt.get_mut(idx_a) {
            ball.recall(log);
        }
        trainer_a.belt.remove(idx_a);
        RoundResult::Win(Side::B)
    } else {
        log.log_draw();
        if let Some(ball) = trainer_a.belt.get_mut(idx_a) {
            ball.recall(log);
        }
        if let Some(ball) = trainer_b.belt.get_mut(idx_b) {
            ball.recall(log);
        }
        // a first-round draw eliminates both combatants; later draws leave
        // them on the belts for future rounds
        if round == 0 {
            trainer_a.belt.remove(idx_a);
            trainer_b.belt.remove(idx_b);
        }
        RoundResult::Draw
    }
}

/// Run rounds until one belt empties (or the round cap cuts a draw chain),
/// then score by remaining ball counts: strictly more balls wins, equal
/// counts is a draw.
pub fn run_battle(
    trainer_a: &mut Trainer,
    trainer_b: &mut Trainer,
    rng: &mut impl Rng,
    log: &mut BattleLog,
) -> BattleSummary {
    let mut rounds = 0;
    while !trainer_a.belt.is_empty() && !trainer_b.belt.is_empty() {
        if rounds >= MAX_ROUNDS {
            log.log_fault("Round limit reached, scoring the battle as it stands");
            break;
        }
        log.log_round(rounds + 1);
        resolve_round(trainer_a, trainer_b, rounds, rng, log);
        rounds += 1;
    }

    let outcome = if trainer_a.belt.len() > trainer_b.belt.len() {
        log.log_battle_winner(&trainer_a.name);
        BattleOutcome::Win(Side::A)
    } else if trainer_b.belt.len() > trainer_a.belt.len() {
        log.log_battle_winner(&trainer_b.name);
        BattleOutcome::Win(Side::B)
    } else {
        log.log_battle_draw();
        BattleOutcome::Draw
    };
    BattleSummary { rounds, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn mk_trainer(name: &str, roster: &[&str]) -> Trainer {
        Trainer::with_roster(name, roster).unwrap()
    }

    #[test]
    fn win_removes_only_the_losers_ball() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["squirtle"]);
        let mut gary = mk_trainer("Gary", &["charmander"]);

        let result = resolve_round(&mut ash, &mut gary, 0, &mut rng, &mut log);
        assert_eq!(result, RoundResult::Win(Side::A));
        assert_eq!(ash.belt.len(), 1);
        assert_eq!(gary.belt.len(), 0);
        assert!(log.lines().contains(&"|win|Squirtle1".to_string()));
    }

    #[test]
    fn winner_side_recall_is_a_logged_noop() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["bulbasaur"]);
        let mut gary = mk_trainer("Gary", &["squirtle"]);

        resolve_round(&mut ash, &mut gary, 0, &mut rng, &mut log);
        // the loser's ball was closed, so the recall before removal faults
        assert!(log
            .lines()
            .contains(&"|fault|Pokeball is already closed or empty".to_string()));
        assert!(!log.lines().iter().any(|l| l.starts_with("|recall|")));
    }

    #[test]
    fn round_zero_draw_removes_both_balls() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["squirtle"]);
        let mut gary = mk_trainer("Gary", &["squirtle"]);

        let result = resolve_round(&mut ash, &mut gary, 0, &mut rng, &mut log);
        assert_eq!(result, RoundResult::Draw);
        assert!(ash.belt.is_empty());
        assert!(gary.belt.is_empty());
    }

    #[test]
    fn later_round_draw_removes_neither_ball() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["charmander"]);
        let mut gary = mk_trainer("Gary", &["charmander"]);

        let result = resolve_round(&mut ash, &mut gary, 1, &mut rng, &mut log);
        assert_eq!(result, RoundResult::Draw);
        assert_eq!(ash.belt.len(), 1);
        assert_eq!(gary.belt.len(), 1);
    }

    #[test]
    fn one_ball_type_advantage_battle_ends_in_one_round() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["squirtle"]);
        let mut gary = mk_trainer("Gary", &["charmander"]);

        let summary = run_battle(&mut ash, &mut gary, &mut rng, &mut log);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.outcome, BattleOutcome::Win(Side::A));
        assert!(log.lines().contains(&"|battlewin|Ash".to_string()));
    }

    #[test]
    fn same_species_single_ball_battle_is_a_one_round_draw() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["bulbasaur"]);
        let mut gary = mk_trainer("Gary", &["bulbasaur"]);

        let summary = run_battle(&mut ash, &mut gary, &mut rng, &mut log);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.outcome, BattleOutcome::Draw);
        assert!(ash.belt.is_empty());
        assert!(gary.belt.is_empty());
    }

    #[test]
    fn endless_draw_chain_is_cut_by_the_round_cap() {
        // two same-species balls per side: round 0 removes one each, every
        // later round draws without removal
        let mut rng = SmallRng::seed_from_u64(9);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["squirtle", "squirtle"]);
        let mut gary = mk_trainer("Gary", &["squirtle", "squirtle"]);

        let summary = run_battle(&mut ash, &mut gary, &mut rng, &mut log);
        assert_eq!(summary.rounds, MAX_ROUNDS);
        assert_eq!(summary.outcome, BattleOutcome::Draw);
        assert_eq!(ash.belt.len(), 1);
        assert_eq!(gary.belt.len(), 1);
    }

    #[test]
    fn empty_belt_battle_completes_immediately() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut log = BattleLog::new();
        let mut ash = mk_trainer("Ash", &["squirtle"]);
        let mut gary = mk_trainer("Gary", &[]);

        let summary = run_battle(&mut ash, &mut gary, &mut rng, &mut log);
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.outcome, BattleOutcome::Win(Side::A));
    }
}
