use anyhow::Context;
use pokemon_arena::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin()
        .read_line(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_battle_count() -> anyhow::Result<usize> {
    loop {
        let line = prompt_line("Enter the number of battles: ")?;
        match parse_battle_count(&line) {
            Ok(count) => return Ok(count),
            Err(err) => println!("{err}"),
        }
    }
}

/// Render one log event as narration. Unknown events render as nothing.
fn render_event(line: &str) -> Option<String> {
    let fields: Vec<&str> = line.split('|').collect();
    let arg = |idx: usize| fields.get(idx).copied().unwrap_or("");
    match *fields.get(1)? {
        "battle" => Some(format!("=== Battle {} ===", arg(2))),
        "round" => Some(format!("=== Round {} ===", arg(2))),
        "throw" => Some(format!("{} throws a pokeball with {}", arg(2), arg(3))),
        "thrown" => Some("Pokeball is thrown!".to_string()),
        "choose" => Some(format!("{}, I choose you!", arg(2))),
        "cry" => Some(arg(2).to_string()),
        "recall" => Some(format!("{}, come back!", arg(2))),
        "win" => Some(format!("{} wins!", arg(2))),
        "draw" => Some("It's a draw!".to_string()),
        "battlewin" => Some(format!("{} wins the battle!", arg(2))),
        "battledraw" => Some("The battle is a draw!".to_string()),
        "fault" => Some(arg(2).to_string()),
        _ => None,
    }
}

fn print_new_events(log: &BattleLog, cursor: usize) {
    for line in log.lines_since(cursor) {
        if let Some(text) = render_event(line) {
            println!("{text}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let name_1 = prompt_line("Name of trainer 1: ")?;
    let mut trainer_1 = Trainer::new(name_1)?;

    let name_2 = prompt_line("Name of trainer 2: ")?;
    let mut trainer_2 = Trainer::new(name_2)?;

    println!("=== Arena Battle Start ===");
    let battles = prompt_battle_count()?;

    let mut rng = SmallRng::from_entropy();
    let mut log = BattleLog::new();
    let mut series = Series::new(battles);
    let mut cursor = 0;

    while series
        .next_battle(&mut trainer_1, &mut trainer_2, &mut rng, &mut log)
        .is_some()
    {
        print_new_events(&log, cursor);
        cursor = log.len();
        if !series.is_finished() {
            prompt_line("Press Enter to start the next battle...")?;
        }
    }
    println!("=== Arena Battle End ===");

    println!("Total battles: {}", series.battles_fought());
    println!("Total rounds: {}", series.total_rounds());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_as_narration() {
        assert_eq!(
            render_event("|throw|Ash|Squirtle1").unwrap(),
            "Ash throws a pokeball with Squirtle1"
        );
        assert_eq!(render_event("|cry|Squirtle1!!!").unwrap(), "Squirtle1!!!");
        assert_eq!(render_event("|draw|").unwrap(), "It's a draw!");
        assert_eq!(
            render_event("|battlewin|Ash").unwrap(),
            "Ash wins the battle!"
        );
        assert!(render_event("|unknown|x").is_none());
    }
}
