//! The interactive turn loop.
//!
//! Thin wrapper over the engine: it prompts for rerolls and ability choice,
//! renders events, and watches for defeat. All rules live in
//! `dicebound-core`; this module only moves text in and out.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use dicebound_core::{CombatantId, DecisionProvider, Engine, GameConfig};

use crate::render;

const WIDE_RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

/// Stdin-backed Evasive prompt.
///
/// Anything other than an explicit `n` spends the token, so a stray enter
/// keeps the duel moving.
pub struct PromptDecisions;

impl DecisionProvider for PromptDecisions {
    fn spend_evasive(&mut self, owner: &str) -> bool {
        let answer = prompt(&format!(
            "{owner} holds an Evasive token. Spend it to deflect the incoming damage? (Y/N): "
        ))
        .unwrap_or_default();
        !answer.trim().eq_ignore_ascii_case("n")
    }
}

/// Runs the duel until one side falls.
pub fn run(mut engine: Engine, banner: &Path) -> Result<()> {
    if let Ok(text) = std::fs::read_to_string(banner) {
        println!("{text}");
    }

    let players = [Engine::PLAYER_ONE, Engine::PLAYER_TWO];
    let mut turn: usize = 0;

    loop {
        let actor = players[turn % players.len()];
        let target = engine.opponent(actor);

        // Income: one combat point per turn after the first. Upkeep, draw
        // and discard are not part of this resolver.
        if turn != 0 {
            engine.combatant_mut(actor).combat_points += 1;
        }

        print_round_header(&engine, turn, actor);
        offensive_roll_phase(&mut engine, actor)?;
        select_and_use_ability(&mut engine, actor, target)?;

        if let Some(loser) = players.iter().find(|&&id| engine.combatant(id).is_defeated()) {
            let winner = engine.opponent(*loser);
            println!("\n{WIDE_RULE}");
            println!(
                "{} falls! {} wins the duel.",
                engine.combatant(*loser).name(),
                engine.combatant(winner).name()
            );
            println!("{WIDE_RULE}");
            return Ok(());
        }

        turn += 1;
    }
}

fn print_round_header(engine: &Engine, turn: usize, actor: CombatantId) {
    println!("{WIDE_RULE}");
    println!(
        "ROUND {}, {}'s TURN",
        turn / engine.combatants().len(),
        engine.combatant(actor).name()
    );
    println!("{WIDE_RULE}");
    for (index, combatant) in engine.combatants().iter().enumerate() {
        println!("Player {}:", index + 1);
        println!("\n{combatant}\n");
    }
    println!("{WIDE_RULE}");
}

fn offensive_roll_phase(engine: &mut Engine, actor: CombatantId) -> Result<()> {
    println!("{THIN_RULE}");
    println!("OFFENSIVE ROLL PHASE");
    println!("{THIN_RULE}");

    engine.begin_offensive_phase(actor);
    drain_events(engine);

    while engine.combatant(actor).rolls_remaining > 0 {
        engine.roll_pool(actor);
        engine.combatant_mut(actor).rolls_remaining -= 1;
        println!(
            "\n{}: Offensive Roll: {}",
            engine.combatant(actor).name(),
            engine.combatant(actor).dice_line()
        );

        let rolls_left = engine.combatant(actor).rolls_remaining;
        if rolls_left == 0 {
            break;
        }

        let names: Vec<&str> = engine
            .combatant(actor)
            .valid_abilities()
            .iter()
            .map(|(_, ability)| ability.name.as_str())
            .collect();
        if names.is_empty() {
            println!("\nAvailable abilities: none yet");
        } else {
            println!("\nAvailable abilities: {}", names.join(", "));
        }

        println!(
            "{} possible reroll{}.",
            rolls_left,
            if rolls_left == 1 { "" } else { "s" }
        );
        let input = prompt("Input dice to freeze / unfreeze (numbers 1-5): ")?;
        for index in 0..GameConfig::DICE_POOL {
            if input.contains(&(index + 1).to_string()) {
                if let Some(die) = engine.combatant_mut(actor).die_mut(index) {
                    die.locked = !die.locked;
                }
            }
        }
    }
    println!();
    Ok(())
}

fn select_and_use_ability(
    engine: &mut Engine,
    actor: CombatantId,
    target: CombatantId,
) -> Result<()> {
    let choices: Vec<(usize, String)> = engine
        .combatant(actor)
        .valid_abilities()
        .iter()
        .map(|(index, ability)| {
            let marker = if ability.ultimate { " (ultimate)" } else { "" };
            (*index, format!("{}{}", ability.name, marker))
        })
        .collect();

    if choices.is_empty() {
        println!("No available abilities are possible.");
        return Ok(());
    }

    println!("Choose one of the following abilities:");
    for (position, (_, name)) in choices.iter().enumerate() {
        println!("{}. {}", position + 1, name);
    }

    let input = prompt("Select ability: ")?;
    let position = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&n| n < choices.len())
        .unwrap_or(0);
    println!();

    let (ability_index, _) = choices[position];
    engine.use_ability(actor, ability_index, target)?;
    drain_events(engine);
    Ok(())
}

fn drain_events(engine: &mut Engine) {
    for event in engine.take_events() {
        println!("{}", render::event_line(engine, &event));
    }
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
