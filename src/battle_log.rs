use serde_json::json;

/// Structured event log for a run. Events use pipe-delimited lines
/// (`|event|args`); the CLI renders them to narration and tests assert on
/// them directly. Soft failures land here as `|fault|` lines instead of
/// propagating as errors.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_battle_start(&mut self, number: usize) {
        self.lines.push(format!("|battle|{number}"));
    }

    pub fn log_round(&mut self, number: usize) {
        self.lines.push(format!("|round|{number}"));
    }

    pub fn log_throw(&mut self, trainer: &str, creature: &str) {
        self.lines.push(format!("|throw|{trainer}|{creature}"));
    }

    pub fn log_thrown(&mut self) {
        self.lines.push("|thrown|".to_string());
    }

    pub fn log_choose(&mut self, creature: &str) {
        self.lines.push(format!("|choose|{creature}"));
    }

    pub fn log_cry(&mut self, cry: &str) {
        self.lines.push(format!("|cry|{cry}"));
    }

    pub fn log_recall(&mut self, creature: &str) {
        self.lines.push(format!("|recall|{creature}"));
    }

    pub fn log_win(&mut self, creature: &str) {
        self.lines.push(format!("|win|{creature}"));
    }

    pub fn log_draw(&mut self) {
        self.lines.push("|draw|".to_string());
    }

    pub fn log_battle_winner(&mut self, trainer: &str) {
        self.lines.push(format!("|battlewin|{trainer}"));
    }

    pub fn log_battle_draw(&mut self) {
        self.lines.push("|battledraw|".to_string());
    }

    pub fn log_fault(&mut self, message: &str) {
        self.lines.push(format!("|fault|{message}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended since `from`, for incremental rendering.
    pub fn lines_since(&self, from: usize) -> &[String] {
        &self.lines[from.min(self.lines.len())..]
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "log": self.lines,
        })
    }
}
