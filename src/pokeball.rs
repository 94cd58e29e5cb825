use crate::battle_log::BattleLog;
use crate::creature::Creature;

/// Single-slot holder gating a creature's availability via open/closed
/// state. Illegal operations never fail hard: they log a `|fault|` and
/// leave the ball untouched.
///
/// The gating is deliberately asymmetric: `throw` requires a closed ball
/// and always ends closed, while `recall` requires an *open* ball to do
/// anything. In the battle loop every ball stays closed, so the recall
/// issued on a defeated creature's ball is always a logged no-op.
#[derive(Clone, Debug, Default)]
pub struct Pokeball {
    is_open: bool,
    contents: Option<Creature>,
}

impl Pokeball {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_none()
    }

    /// Peek at the held creature without releasing it.
    pub fn creature(&self) -> Option<&Creature> {
        self.contents.as_ref()
    }

    /// Store a creature. Fails (no-op + diagnostic) if the ball is open or
    /// already occupied.
    pub fn enclose(&mut self, creature: Creature, log: &mut BattleLog) {
        if self.is_open {
            log.log_fault("Cannot enclose a creature, pokeball is already open");
            return;
        }
        if self.contents.is_some() {
            log.log_fault("Cannot enclose a creature, pokeball is already occupied");
            return;
        }
        self.contents = Some(creature);
    }

    /// Release the held creature: open, announce it, clear, close again.
    /// Fails (no-op + diagnostic) if the ball is open or empty. Once any
    /// contents existed the ball always ends closed and empty.
    pub fn throw(&mut self, log: &mut BattleLog) {
        if self.is_open || self.contents.is_none() {
            log.log_fault("Pokeball is empty or already open");
            return;
        }
        log.log_thrown();
        self.is_open = true;
        if let Some(creature) = self.contents.take() {
            log.log_choose(creature.name());
            log.log_cry(&creature.battle_cry());
        }
        self.is_open = false;
    }

    /// Return the held creature. Fails (no-op + diagnostic) unless the ball
    /// is open with contents.
    pub fn recall(&mut self, log: &mut BattleLog) {
        if !self.is_open || self.contents.is_none() {
            log.log_fault("Pokeball is already closed or empty");
            return;
        }
        if let Some(creature) = self.contents.take() {
            log.log_recall(creature.name());
        }
        self.is_open = false;
    }
}
