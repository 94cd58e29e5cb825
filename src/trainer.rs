use crate::battle_log::BattleLog;
use crate::creature::{species_from_id, Creature, Species};
use crate::error::ArenaError;
use crate::pokeball::Pokeball;

pub const MAX_POKEBALLS: usize = 6;

/// Default roster composition: two creatures of each species.
pub const DEFAULT_ROSTER: [&str; MAX_POKEBALLS] = [
    "squirtle",
    "squirtle",
    "bulbasaur",
    "bulbasaur",
    "charmander",
    "charmander",
];

/// Ordered collection of pokeballs owned by one trainer. Balls are removed
/// by the round resolver as creatures are defeated and never re-added.
#[derive(Clone, Debug, Default)]
pub struct Belt {
    balls: Vec<Pokeball>,
}

impl Belt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn push(&mut self, ball: Pokeball) -> Result<(), ArenaError> {
        if self.balls.len() >= MAX_POKEBALLS {
            return Err(ArenaError::BeltFull);
        }
        self.balls.push(ball);
        Ok(())
    }

    pub fn get(&self, idx: usize) -> Option<&Pokeball> {
        self.balls.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Pokeball> {
        self.balls.get_mut(idx)
    }

    /// Positional removal; indices past `idx` shift down, so callers must
    /// re-select before reusing an index.
    pub fn remove(&mut self, idx: usize) -> Pokeball {
        self.balls.remove(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokeball> {
        self.balls.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pokeball> {
        self.balls.iter_mut()
    }
}

/// A trainer: a name and one belt, populated once at startup and never
/// replenished afterwards.
#[derive(Clone, Debug)]
pub struct Trainer {
    pub name: String,
    pub belt: Belt,
}

impl Trainer {
    /// Trainer with the default two-of-each-species roster.
    pub fn new(name: impl Into<String>) -> Result<Self, ArenaError> {
        Self::with_roster(name, &DEFAULT_ROSTER)
    }

    /// Trainer with an explicit roster of species ids. Creatures are named
    /// by species and ordinal ("Squirtle1", "Squirtle2", ...).
    pub fn with_roster(name: impl Into<String>, roster: &[&str]) -> Result<Self, ArenaError> {
        let mut belt = Belt::new();
        let mut counts = [0usize; Species::ALL.len()];
        // roster construction only; faults here would indicate a bug
        let mut log = BattleLog::new();
        for id in roster {
            let species = species_from_id(id)?;
            let slot = Species::ALL.iter().position(|s| *s == species).unwrap_or(0);
            counts[slot] += 1;
            let creature = Creature::new(
                species,
                format!("{}{}", species.as_str(), counts[slot]),
            );
            let mut ball = Pokeball::new();
            ball.enclose(creature, &mut log);
            belt.push(ball)?;
        }
        Ok(Self {
            name: name.into(),
            belt,
        })
    }

    /// Throw every ball that still holds a creature.
    pub fn throw_all(&mut self, log: &mut BattleLog) {
        for ball in self.belt.iter_mut() {
            if !ball.is_empty() {
                ball.throw(log);
            }
        }
    }

    /// Attempt to recall every ball; closed balls fault and no-op.
    pub fn recall_all(&mut self, log: &mut BattleLog) {
        for ball in self.belt.iter_mut() {
            ball.recall(log);
        }
    }
}
